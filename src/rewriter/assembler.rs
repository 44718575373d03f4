//! Output assembly
//!
//! Chooses the output shape from the scan result and appends the trailing
//! export form to the stripped body.

use crate::models::declaration::{DefaultExport, ExportScan, OutputShape, RewrittenDocument};

/// Combines scanner and stripper output into the final document
pub struct OutputAssembler;

impl OutputAssembler {
    /// Assemble the rewritten document
    ///
    /// `namespace_name` is only called when the namespace branch is taken.
    /// A default export wins over named exports; the named records are then
    /// dropped from the output.
    pub fn assemble<F>(scan: &ExportScan, body: &str, namespace_name: F) -> RewrittenDocument
    where
        F: FnOnce() -> String,
    {
        if let Some(marker) = scan.default_export.as_ref().filter(|marker| marker.payload.is_some()) {
            return Self::default_export(body, marker);
        }

        if scan.has_named() {
            let members = scan.names();
            return Self::namespace(body, &namespace_name(), &members);
        }

        if scan.has_default() {
            // Marker without a payload: nothing to assign
            return Self::passthrough(body);
        }

        Self::empty_module(body)
    }

    /// `export = <expression>;` after removing the floating payload statement
    ///
    /// A marker without a payload leaves the body as it is.
    pub fn default_export(body: &str, marker: &DefaultExport) -> RewrittenDocument {
        let (Some(payload), Some(expression)) = (marker.payload.as_deref(), marker.expression()) else {
            return Self::passthrough(body);
        };

        let mut text = body.replacen(payload, "", 1);
        text.push_str(&format!("\n\nexport = {};", expression));

        RewrittenDocument::new(text.trim(), OutputShape::DefaultExport)
    }

    /// Wrap the members in a synthetic namespace and assign it
    pub fn namespace(body: &str, name: &str, members: &[&str]) -> RewrittenDocument {
        let mut text = body.to_string();
        text.push_str(&format!("\n\ndeclare namespace {} {{\n", name));
        text.push_str(&format!("  export {{ {} }};\n", members.join(", ")));
        text.push_str(&format!("}}\n\nexport = {};", name));

        RewrittenDocument {
            namespace: Some(name.to_string()),
            ..RewrittenDocument::new(text.trim(), OutputShape::Namespace)
        }
    }

    /// Mark the document as a module without exports
    pub fn empty_module(body: &str) -> RewrittenDocument {
        let mut text = body.to_string();
        text.push_str("\n\nexport {};");

        RewrittenDocument::new(text.trim(), OutputShape::EmptyModule)
    }

    fn passthrough(body: &str) -> RewrittenDocument {
        RewrittenDocument::new(body.trim(), OutputShape::Passthrough)
    }
}
