//! Namespace name derivation

use std::path::Path;
use std::sync::Arc;

/// Fallback when the source identifier yields no usable characters
pub const DEFAULT_NAMESPACE: &str = "Library";

/// Declaration suffixes removed from the base name before sanitizing
const DECLARATION_SUFFIXES: [&str; 3] = [".d.ts", ".d.cts", ".d.mts"];

/// Hook replacing the default derivation, given the source identifier
pub type NamespaceNameFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Derive a namespace name from a source identifier
///
/// The directory part and the declaration suffix are dropped, every
/// character outside `[A-Za-z0-9]` is removed, and a leading digit gets an
/// underscore prefix. `dist/123-my.pkg.d.ts` becomes `_123mypkg`.
pub fn derive_namespace_name(source: &str) -> String {
    let base = base_name(source);

    let mut name: String = base.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    if name.is_empty() {
        DEFAULT_NAMESPACE.to_string()
    } else {
        name
    }
}

fn base_name(source: &str) -> &str {
    let file_name = Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(source);

    DECLARATION_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(file_name)
}

/// Camel-case a package name for use as a namespace
///
/// A leading npm scope is dropped and every `-x` becomes `X`, so
/// `@acme/my-lib` becomes `myLib`. The result is passed through the same
/// sanitizing as file names.
pub fn package_namespace_name(package_name: &str) -> String {
    let unscoped = package_name
        .rsplit_once('/')
        .map(|(_, name)| name)
        .unwrap_or(package_name);

    let mut camel = String::with_capacity(unscoped.len());
    let mut upper_next = false;
    for c in unscoped.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    derive_namespace_name(&camel)
}

/// Hook that always returns the same name
pub fn fixed_namespace(name: impl Into<String>) -> NamespaceNameFn {
    let name = name.into();
    Arc::new(move |_source: &str| name.clone())
}

/// Check that a string is a plain identifier usable as a namespace name
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
