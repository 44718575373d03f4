//! Content checks applied before a document is rewritten

use once_cell::sync::Lazy;
use regex::Regex;

/// Block comments and line comments
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)/\*[\s\S]*?\*/|//.*$").expect("comment pattern is valid"));

/// Remove every comment from a document
pub fn strip_comments(text: &str) -> String {
    COMMENT.replace_all(text, "").into_owned()
}

/// Whether anything other than comments and whitespace remains
///
/// Documents failing this check are skipped and produce no `.d.cts` file.
pub fn has_meaningful_content(text: &str) -> bool {
    !strip_comments(text).trim().is_empty()
}
