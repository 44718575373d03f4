//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::models::config::PartialSettings;

/// Name of the configuration file looked up in the working and home directories
pub const CONFIG_FILE_NAME: &str = ".dts-cjs.toml";

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConvertError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ConvertError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ConvertError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(out_dir) = &settings.out_dir {
        if out_dir.as_os_str().is_empty() {
            return Err(ConvertError::config_error(format!(
                "Invalid empty out_dir in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(pattern) = &settings.pattern {
        if pattern.is_empty() {
            return Err(ConvertError::config_error(format!(
                "Empty pattern in config file: {}",
                path.display()
            )));
        }
        glob::Pattern::new(pattern).map_err(|e| {
            ConvertError::config_error(format!(
                "Invalid pattern '{}' in config file: {}: {}",
                pattern,
                path.display(),
                e
            ))
        })?;
    }

    if let Some(patterns) = &settings.ignore_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(ConvertError::config_error(format!(
                    "Empty ignore pattern in config file: {}",
                    path.display()
                )));
            }
            glob::Pattern::new(pattern).map_err(|e| {
                ConvertError::config_error(format!(
                    "Invalid ignore pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(namespace) = &settings.namespace {
        if namespace.is_empty() {
            return Err(ConvertError::config_error(format!(
                "Invalid empty namespace in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ConvertError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for candidate in default_config_locations() {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading configuration file");
            return Ok(Some(parse_config_file(candidate)?));
        }
    }

    Ok(None)
}

/// Candidate configuration files, highest priority first
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(CONFIG_FILE_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("dts-cjs").join("config.toml"));
    }

    locations
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))?;

    Ok(())
}
