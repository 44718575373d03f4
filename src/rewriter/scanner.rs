//! Export scanning
//!
//! Finds the exported symbol names of a declaration document and whether it
//! has a default export. Matching is line-anchored: only forms that start a
//! line are recognised.

use crate::models::declaration::{DefaultExport, ExportRecord, ExportScan};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static DECLARED_EXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^export\s+declare\s+(?:function|const|let|var|class|interface|type|enum)\s+(\w+)",
    )
    .expect("declared export pattern is valid")
});

// Group 2 is the rest of the line after the closing brace.
static EXPORT_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+\{\s*([^}]+)\s*\}([^\r\n]*)").expect("export list pattern is valid")
});

// A list followed by `from '...'` re-exports another document and is left alone.
static FROM_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*from\b").expect("from clause pattern is valid"));

static LIST_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s+as\s+(\w+)").expect("alias pattern is valid"));

static DEFAULT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^export\s+default\s+").expect("default marker pattern is valid"));

static DEFAULT_PAYLOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^export\s+default\s+([^\r\n]+)").expect("default payload pattern is valid")
});

/// Scanner for exported names and the default export marker
pub struct ExportScanner;

impl ExportScanner {
    /// Scan a document for its exports
    pub fn scan(text: &str) -> ExportScan {
        let mut records = Self::declared_exports(text);
        records.extend(Self::list_exports(text));

        ExportScan {
            records: Self::dedupe(records),
            default_export: Self::default_export(text),
        }
    }

    /// Names introduced by `export declare <keyword> <name>` lines
    pub fn declared_exports(text: &str) -> Vec<ExportRecord> {
        DECLARED_EXPORT
            .captures_iter(text)
            .map(|caps| ExportRecord::declared(&caps[1]))
            .collect()
    }

    /// Effective names from `export { ... }` statement lines
    pub fn list_exports(text: &str) -> Vec<ExportRecord> {
        EXPORT_LIST
            .captures_iter(text)
            .filter(|caps| !FROM_CLAUSE.is_match(&caps[2]))
            .flat_map(|caps| Self::parse_list_entries(&caps[1]))
            .map(ExportRecord::re_exported)
            .collect()
    }

    /// Split the inside of an export list into effective names
    ///
    /// `a` yields `a`, `a as b` yields `b`. Empty entries (trailing commas)
    /// are dropped.
    pub fn parse_list_entries(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match LIST_ALIAS.captures(entry) {
                Some(caps) => caps[2].to_string(),
                None => entry.to_string(),
            })
            .collect()
    }

    /// Detect the default export marker and capture its payload
    pub fn default_export(text: &str) -> Option<DefaultExport> {
        if !DEFAULT_MARKER.is_match(text) {
            return None;
        }

        let payload = DEFAULT_PAYLOAD
            .captures(text)
            .map(|caps| caps[1].to_string());

        Some(DefaultExport { payload })
    }

    fn dedupe(records: Vec<ExportRecord>) -> Vec<ExportRecord> {
        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|record| seen.insert(record.name.clone()))
            .collect()
    }
}
