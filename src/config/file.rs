//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ConvertError, Result};
use crate::models::config::PartialSettings;

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "DTS_CJS";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(parser::CONFIG_FILE_NAME),
            name: "default config file".to_string(),
            priority: 10, // Below environment variables and the command line
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 10,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ConvertError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_OUT_DIR`, `<PREFIX>_PATTERN`, `<PREFIX>_IGNORE`
/// (comma separated), `<PREFIX>_NAMESPACE` and `<PREFIX>_OUTPUT_FORMAT`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    const KEYS: [&'static str; 5] = ["OUT_DIR", "PATTERN", "IGNORE", "NAMESPACE", "OUTPUT_FORMAT"];

    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 20,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(out_dir) = self.var("OUT_DIR") {
            settings.out_dir = Some(PathBuf::from(out_dir));
        }

        if let Some(pattern) = self.var("PATTERN") {
            settings.pattern = Some(pattern);
        }

        if let Some(ignore) = self.var("IGNORE") {
            settings.ignore_patterns = Some(
                ignore
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(namespace) = self.var("NAMESPACE") {
            settings.namespace = Some(namespace);
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            match format.parse() {
                Ok(output_format) => settings.output_format = Some(output_format),
                Err(message) => tracing::warn!(source = %self.name, "{}", message),
            }
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        Self::KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
