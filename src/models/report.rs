//! Conversion report structures

use super::declaration::OutputShape;
use crate::error::{ErrorSeverity, ConvertError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A document that was rewritten and written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub target: PathBuf,
    pub shape: OutputShape,
    pub namespace: Option<String>,
}

/// Outcome of processing a single discovered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileOutcome {
    Converted(ConvertedFile),
    /// Only comments or whitespace; nothing was written
    Skipped { path: PathBuf },
}

/// A document whose conversion failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFailure {
    pub path: PathBuf,
    pub error: String,
    pub severity: String,
}

impl ConversionFailure {
    pub fn new(path: PathBuf, error: &ConvertError) -> Self {
        Self {
            path,
            error: error.user_message(),
            severity: error.severity().to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == ErrorSeverity::Critical.to_string()
    }
}

/// Summary counters for a batch run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub discovered: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub namespaces: usize,
    pub default_exports: usize,
    pub empty_modules: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl ConversionSummary {
    /// Format the run duration as a human-readable string
    pub fn format_duration(&self) -> String {
        let secs = self.duration.as_secs();
        let millis = self.duration.subsec_millis();

        if secs == 0 {
            format!("{}ms", millis)
        } else if secs < 60 {
            format!("{}.{:03}s", secs, millis)
        } else {
            format!("{}m {}s", secs / 60, secs % 60)
        }
    }
}

/// Complete result of converting every discovered document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionReport {
    pub out_dir: PathBuf,
    pub converted: Vec<ConvertedFile>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<ConversionFailure>,
    pub summary: ConversionSummary,
}

impl ConversionReport {
    /// Create an empty report for the given output directory
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    /// Record the outcome of one document
    pub fn add_outcome(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted(file) => {
                self.summary.converted += 1;
                match file.shape {
                    OutputShape::Namespace => self.summary.namespaces += 1,
                    OutputShape::DefaultExport => self.summary.default_exports += 1,
                    OutputShape::EmptyModule => self.summary.empty_modules += 1,
                    OutputShape::Passthrough => {}
                }
                self.converted.push(file);
            }
            FileOutcome::Skipped { path } => {
                self.summary.skipped += 1;
                self.skipped.push(path);
            }
        }
    }

    /// Record a per-document failure
    pub fn add_failure(&mut self, path: PathBuf, error: &ConvertError) {
        self.summary.failed += 1;
        self.failures.push(ConversionFailure::new(path, error));
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.summary.duration = duration;
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Sort every list by path so reports do not depend on scheduling order
    pub fn finalize(&mut self) {
        self.converted.sort_by(|a, b| a.source.cmp(&b.source));
        self.skipped.sort();
        self.failures.sort_by(|a, b| a.path.cmp(&b.path));
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
