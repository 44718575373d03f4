//! Core functionality for discovering and converting declaration documents

pub mod content;
pub mod converter;
pub mod discovery;
pub mod parallel;

pub use converter::{cjs_path, rewrite_options, Converter};
pub use discovery::{DiscoveredFiles, Discovery};
pub use parallel::ProgressUpdate;
