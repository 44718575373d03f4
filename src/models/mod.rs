//! Data models and structures for dts-cjs

pub mod config;
pub mod declaration;
pub mod report;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use declaration::{
    DeclarationDocument, DefaultExport, ExportOrigin, ExportRecord, ExportScan, OutputShape,
    RewrittenDocument,
};
pub use report::{ConversionFailure, ConversionReport, ConversionSummary, ConvertedFile, FileOutcome};
