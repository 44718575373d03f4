//! Declaration document structures
//!
//! Types shared by the scanning, stripping and assembly stages of the
//! declaration rewriter. All of them are transient: they live for the
//! duration of a single rewrite call.

use serde::{Deserialize, Serialize};

/// A declaration document handed to the rewriter
#[derive(Debug, Clone, Copy)]
pub struct DeclarationDocument<'a> {
    /// Full document text
    pub text: &'a str,
    /// Source identifier, only used to derive the namespace name
    pub source: &'a str,
}

impl<'a> DeclarationDocument<'a> {
    /// Create a new document view
    pub fn new(text: &'a str, source: &'a str) -> Self {
        Self { text, source }
    }
}

/// Where an export record was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportOrigin {
    /// `export declare <keyword> <name>`
    Declared,
    /// `export { a, b as c }`
    ReExportList,
}

/// One named symbol that is part of a document's public surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,
    pub origin: ExportOrigin,
}

impl ExportRecord {
    pub fn declared(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: ExportOrigin::Declared,
        }
    }

    pub fn re_exported(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: ExportOrigin::ReExportList,
        }
    }
}

/// Marker for a top-level `export default` clause
///
/// `payload` holds the remainder of the line after `export default`. It is
/// `None` only when the clause exists but nothing could be captured after it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefaultExport {
    pub payload: Option<String>,
}

impl DefaultExport {
    /// Payload with a single trailing semicolon removed
    pub fn expression(&self) -> Option<&str> {
        self.payload
            .as_deref()
            .map(|payload| payload.strip_suffix(';').unwrap_or(payload))
    }
}

/// Everything the scanner learned about a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportScan {
    /// Records in collection order, duplicates already collapsed
    pub records: Vec<ExportRecord>,
    pub default_export: Option<DefaultExport>,
}

impl ExportScan {
    /// Effective exported names in first-seen order
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn has_default(&self) -> bool {
        self.default_export.is_some()
    }

    pub fn has_named(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Which output branch the assembler produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputShape {
    /// `export = <default payload>;`
    DefaultExport,
    /// `declare namespace X { ... }` followed by `export = X;`
    Namespace,
    /// `export {};`
    EmptyModule,
    /// A default clause without a capturable payload and no named exports;
    /// the stripped body is emitted as-is.
    Passthrough,
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputShape::DefaultExport => write!(f, "default export"),
            OutputShape::Namespace => write!(f, "namespace"),
            OutputShape::EmptyModule => write!(f, "empty module"),
            OutputShape::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Final rewriter output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenDocument {
    pub text: String,
    pub shape: OutputShape,
    /// Resolved namespace name, set only for [`OutputShape::Namespace`]
    pub namespace: Option<String>,
}

impl RewrittenDocument {
    pub fn new(text: impl Into<String>, shape: OutputShape) -> Self {
        Self {
            text: text.into(),
            shape,
            namespace: None,
        }
    }
}
