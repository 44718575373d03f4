//! dts-cjs - CommonJS-compatible declaration files from ESM `.d.ts` output
//!
//! Library builds that ship both ESM and CommonJS need a `.d.cts` next to
//! every `.d.ts`. This crate rewrites the module-style declarations into a
//! single `export =` assignment: named exports are wrapped in a synthetic
//! namespace, a default export is assigned directly, and documents without
//! exports are marked with `export {};`.
//!
//! The pure rewrite lives in [`rewriter`]; [`core`] discovers documents and
//! converts them in batch.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod rewriter;

// Re-export commonly used types
pub use error::{handle_error, try_with_recovery, ConvertError, ErrorSeverity, OptionExt, Result, ResultExt};
pub use models::{
    config::Settings,
    declaration::{DeclarationDocument, OutputShape, RewrittenDocument},
    report::ConversionReport,
};
pub use rewriter::{rewrite, DeclarationRewriter, RewriteOptions};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
