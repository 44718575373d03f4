//! Declaration rewriting
//!
//! Converts a module-style declaration document (multiple top-level `export`
//! forms) into a namespace-style document ending in a single `export =`
//! assignment. The rewrite is a pure, total function of the document text,
//! its source identifier and the options: it performs no I/O and never fails.
//! It is a one-shot transform; feeding its output back in is not expected to
//! reach a fixed point.
//!
//! Three stages run in sequence:
//! 1. [`ExportScanner`] collects export records and the default export marker.
//! 2. [`ExportStripper`] removes export syntax from the original text.
//! 3. [`OutputAssembler`] picks the output shape and appends the trailing
//!    export form.

pub mod assembler;
pub mod namespace;
pub mod scanner;
pub mod stripper;

pub use assembler::OutputAssembler;
pub use namespace::{
    derive_namespace_name, fixed_namespace, package_namespace_name, NamespaceNameFn,
    DEFAULT_NAMESPACE,
};
pub use scanner::ExportScanner;
pub use stripper::{ExportStripper, StripStep};

use crate::models::declaration::{DeclarationDocument, RewrittenDocument};
use std::fmt;

/// Options recognised by the rewriter
#[derive(Clone, Default)]
pub struct RewriteOptions {
    /// Replaces the default namespace name derivation entirely; the returned
    /// name is used as-is.
    pub namespace_name: Option<NamespaceNameFn>,
}

impl RewriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom namespace name hook
    pub fn with_namespace_name<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.namespace_name = Some(std::sync::Arc::new(hook));
        self
    }

    /// Resolve the namespace name for a source identifier
    pub fn namespace_for(&self, source: &str) -> String {
        match &self.namespace_name {
            Some(hook) => hook(source),
            None => derive_namespace_name(source),
        }
    }
}

impl fmt::Debug for RewriteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewriteOptions")
            .field("namespace_name", &self.namespace_name.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

/// Rewrites declaration documents with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct DeclarationRewriter {
    options: RewriteOptions,
}

impl DeclarationRewriter {
    pub fn new(options: RewriteOptions) -> Self {
        Self { options }
    }

    /// Rewrite one document, reporting which output shape was produced
    pub fn rewrite_document(&self, document: &DeclarationDocument<'_>) -> RewrittenDocument {
        let scan = ExportScanner::scan(document.text);
        let body = ExportStripper::strip(document.text);

        tracing::debug!(
            source = document.source,
            records = scan.records.len(),
            default_export = scan.has_default(),
            "scanned declaration document"
        );

        let rewritten =
            OutputAssembler::assemble(&scan, &body, || self.options.namespace_for(document.source));

        tracing::debug!(source = document.source, shape = %rewritten.shape, "rewrote declaration document");
        rewritten
    }

    /// Rewrite one document and return the text
    pub fn rewrite(&self, text: &str, source: &str) -> String {
        self.rewrite_document(&DeclarationDocument::new(text, source)).text
    }
}

/// Rewrite a declaration document
///
/// Never fails; unrecognised input falls through to the `export {};` form.
pub fn rewrite(text: &str, source: &str, options: &RewriteOptions) -> String {
    DeclarationRewriter::new(options.clone()).rewrite(text, source)
}
