//! Configuration management
//!
//! Settings are merged from several sources, lowest precedence first:
//! built-in defaults, a TOML configuration file, `DTS_CJS_*` environment
//! variables and finally the command line.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use std::path::Path;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_ENV_PREFIX};
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file, CONFIG_FILE_NAME};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if !source.is_available() {
            return Ok(self);
        }

        tracing::debug!(source = source.name(), priority = source.priority(), "merging configuration");
        let partial = source.load()?;
        Ok(self.merge(partial))
    }

    /// Try to load from a source, ignoring it if unavailable or broken
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }

        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(e) => {
                tracing::warn!(source = source.name(), error = %e, "ignoring configuration source");
                self
            }
        }
    }

    /// Add configuration from a file
    pub fn add_config_file(self, path: &Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        if !file_config.is_available() {
            return Err(crate::error::ConvertError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.load_from(&file_config)
    }

    /// Add configuration from the first default location that exists
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Settings merged so far, before defaults are applied
    pub fn partial(&self) -> &PartialSettings {
        &self.partial
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, DEFAULT_ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    // An explicit config file must exist; default locations are optional
    builder = match &cli_args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.add_default_config_file()?,
    };

    builder = builder.try_load_from(&EnvConfig::new(env_prefix));
    builder = builder.load_from(&CliConfig::new(cli_args))?;

    builder.build()
}
