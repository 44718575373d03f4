//! Error handling for dts-cjs
//!
//! Error types, the result alias, and context utilities used by the
//! conversion pipeline around the declaration rewriter.

pub mod context;
pub mod types;

pub use context::{handle_error, try_with_recovery, OptionExt, ResultExt};
pub use types::{ConvertError, ErrorSeverity, Result};
