//! Configuration settings validation

use crate::error::{ConvertError, Result, ResultExt};
use crate::models::config::Settings;
use crate::rewriter::namespace::is_valid_identifier;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.out_dir.is_dir() {
            return Err(ConvertError::OutputDirectoryNotFound {
                path: settings.out_dir.clone(),
            });
        }

        glob::Pattern::new(&settings.pattern)
            .with_context(|| format!("Invalid pattern: {}", settings.pattern))?;

        for pattern in &settings.ignore_patterns {
            glob::Pattern::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        }

        if let Some(namespace) = &settings.namespace {
            if !is_valid_identifier(namespace) {
                return Err(ConvertError::config_error(format!(
                    "Namespace '{}' is not a valid identifier",
                    namespace
                )));
            }
        }

        if settings.namespace_from_package && !settings.package_json.is_file() {
            return Err(ConvertError::package_json(
                settings.package_json.clone(),
                "file not found",
            ));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the report path has an existing parent directory
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ConvertError::InvalidPath {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
