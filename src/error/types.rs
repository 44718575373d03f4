//! Error types and definitions for dts-cjs
//!
//! The declaration rewriter itself is total and has no error type. Everything
//! here belongs to the layer around it: configuration, document discovery,
//! reading and writing documents, and report output.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current document fails but the batch continues
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for dts-cjs operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    TomlParse {
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// A matched path could not be read while expanding the glob
    #[error("Error while scanning {path}: {source}")]
    GlobEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Declaration document read errors
    #[error("Error reading declaration file {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Converted document write errors
    #[error("Error writing converted file {path}: {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered document does not carry the `.d.ts` suffix
    #[error("Not a .d.ts declaration file: {path}")]
    NotDeclarationFile {
        path: PathBuf,
    },

    /// package.json could not be used for namespace naming
    #[error("Invalid package.json {path}: {message}")]
    PackageJson {
        path: PathBuf,
        message: String,
    },

    /// Report file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound {
        path: PathBuf,
    },

    /// Some documents failed to convert
    #[error("{failed} of {total} declaration files failed to convert")]
    BatchFailures {
        failed: usize,
        total: usize,
    },

    /// Generic context wrapper
    #[error("{message}")]
    Context {
        message: String,
    },
}

impl ConvertError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            ConvertError::PermissionDenied { .. } => ErrorSeverity::Warning,
            ConvertError::GlobEntry { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            ConvertError::Config { .. } => ErrorSeverity::Critical,
            ConvertError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ConvertError::ConfigRead { .. } => ErrorSeverity::Critical,
            ConvertError::ConfigParse { .. } => ErrorSeverity::Critical,
            ConvertError::GlobPattern { .. } => ErrorSeverity::Critical,
            ConvertError::PackageJson { .. } => ErrorSeverity::Critical,
            ConvertError::StdoutWrite { .. } => ErrorSeverity::Critical,
            ConvertError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current document fails but the batch continues
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            ConvertError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            ConvertError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid path.", path.display())
            }
            ConvertError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            ConvertError::DocumentRead { path, source, .. } => {
                format!("Could not read '{}': {}. Skipping file.", path.display(), source)
            }
            ConvertError::DocumentWrite { path, source, .. } => {
                format!("Could not write '{}': {}.", path.display(), source)
            }
            ConvertError::NotDeclarationFile { path, .. } => {
                format!("'{}' does not end in .d.ts; refusing to overwrite it. Narrow --pattern to .d.ts files.", path.display())
            }
            ConvertError::OutputDirectoryNotFound { path, .. } => {
                format!("Output directory '{}' does not exist. Run the build first or pass a different --out-dir.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Suggest a fix for errors where one is obvious
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConvertError::InvalidPath { .. } => Some("Check that the path exists and is accessible"),
            ConvertError::ConfigNotFound { .. } => Some(
                "Create a .dts-cjs.toml file in your project directory or specify a config file with --config",
            ),
            ConvertError::PermissionDenied { .. } => Some("Check file permissions on the output directory"),
            ConvertError::OutputDirectoryNotFound { .. } => {
                Some("Run the build first or point --out-dir at the directory containing the .d.ts files")
            }
            ConvertError::GlobPattern { .. } => Some("Check the --pattern and --ignore glob syntax"),
            ConvertError::PackageJson { .. } => {
                Some("Make sure package.json exists and has a \"name\" field, or use --namespace")
            }
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        ConvertError::Io {
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ConvertError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        ConvertError::PermissionDenied {
            path: path.into(),
        }
    }

    /// Create a document read error, mapping permission problems separately
    pub fn document_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            return Self::permission_denied(path);
        }
        ConvertError::DocumentRead {
            path,
            source,
        }
    }

    /// Create a document write error
    pub fn document_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::DocumentWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a package.json error
    pub fn package_json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConvertError::PackageJson {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a context error
    pub fn context(message: impl Into<String>) -> Self {
        ConvertError::Context {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::io_error(err)
    }
}

impl From<toml::de::Error> for ConvertError {
    fn from(err: toml::de::Error) -> Self {
        ConvertError::TomlParse {
            source: err,
        }
    }
}

impl From<glob::PatternError> for ConvertError {
    fn from(err: glob::PatternError) -> Self {
        ConvertError::GlobPattern {
            source: err,
        }
    }
}

impl From<glob::GlobError> for ConvertError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        ConvertError::GlobEntry {
            path,
            source: err.into_error(),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::JsonSerialize {
            source: err,
        }
    }
}

/// Result type alias for dts-cjs operations
pub type Result<T> = std::result::Result<T, ConvertError>;
