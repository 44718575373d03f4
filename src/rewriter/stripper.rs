//! Export syntax removal
//!
//! Produces a body containing only ambient declarations. The four
//! substitutions run in a fixed order over the whole text; export list
//! statements must be deleted before the generic `export ` removal, otherwise
//! they would survive as dangling `{ ... }` blocks.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static EXPORT_DECLARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export\s+declare\s+").expect("export declare pattern is valid"));

static EXPORT_DEFAULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export\s+default\s+").expect("export default pattern is valid"));

static EXPORT_LIST_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+\{[^}]*\}\s*;?\s*$").expect("export list statement pattern is valid")
});

static EXPORT_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export\s+").expect("export keyword pattern is valid"));

/// One substitution step of the stripper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripStep {
    /// `export declare ` becomes `declare `
    DeclareKeyword,
    /// `export default ` is dropped, leaving the value
    DefaultKeyword,
    /// `export { ... };` lines are deleted
    ExportList,
    /// Any other leading `export ` is dropped
    ExportKeyword,
}

impl StripStep {
    /// Steps in the order they must be applied
    pub const ORDER: [StripStep; 4] = [
        StripStep::DeclareKeyword,
        StripStep::DefaultKeyword,
        StripStep::ExportList,
        StripStep::ExportKeyword,
    ];

    /// Apply this step to the whole text
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self {
            StripStep::DeclareKeyword => EXPORT_DECLARE.replace_all(text, "declare "),
            StripStep::DefaultKeyword => EXPORT_DEFAULT.replace_all(text, ""),
            StripStep::ExportList => EXPORT_LIST_STATEMENT.replace_all(text, ""),
            StripStep::ExportKeyword => EXPORT_KEYWORD.replace_all(text, ""),
        }
    }
}

/// Removes export syntax while keeping declaration bodies intact
pub struct ExportStripper;

impl ExportStripper {
    /// Strip every recognised export form from `text`
    pub fn strip(text: &str) -> String {
        StripStep::ORDER
            .iter()
            .fold(text.to_string(), |body, step| step.apply(&body).into_owned())
    }
}
