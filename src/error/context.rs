//! Error context utilities for dts-cjs
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use crate::error::types::ErrorSeverity;
use crate::error::{ConvertError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ConvertError::context(format!("{}: {}", context(), err)))
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let err: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return ConvertError::permission_denied(path.as_ref());
                }
            }

            ConvertError::context(format!("{}: {}", path.as_ref().display(), err))
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
pub fn handle_error(err: ConvertError) -> Option<ConvertError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            tracing::warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            tracing::error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            tracing::error!(critical = true, "{}", message);
            Some(err)
        }
    }
}

/// Try to run a function and handle any errors based on their severity
///
/// Returns Ok(Some(T)) if the function succeeds, Ok(None) for a logged
/// non-critical error, or Err if a critical error occurs.
pub fn try_with_recovery<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match handle_error(err) {
            Some(critical_err) => Err(critical_err),
            None => Ok(None),
        },
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ConvertError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> ConvertError,
    {
        self.ok_or_else(err_fn)
    }
}
