//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default directory searched for declaration documents
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Default glob, relative to the output directory
pub const DEFAULT_PATTERN: &str = "**/*.d.ts";

/// Main configuration settings for dts-cjs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where the build emitted its `.d.ts` files
    pub out_dir: PathBuf,

    /// Glob pattern, relative to `out_dir`, matching documents to convert
    pub pattern: String,

    /// Glob patterns for documents that must never be converted
    pub ignore_patterns: Vec<String>,

    /// Fixed namespace name used for every document
    pub namespace: Option<String>,

    /// Derive the namespace name from the `name` field of `package_json`
    pub namespace_from_package: bool,

    /// package.json consulted when `namespace_from_package` is set
    pub package_json: PathBuf,

    /// Report format (text, json)
    pub output_format: OutputFormat,

    /// Report file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to convert documents in parallel
    pub parallel: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            ignore_patterns: vec!["**/*.d.cts".to_string(), "**/*.d.mts".to_string()],
            namespace: None,
            namespace_from_package: false,
            package_json: PathBuf::from("package.json"),
            output_format: OutputFormat::Text,
            output_file: None,
            parallel: true,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub out_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub ignore_patterns: Option<Vec<String>>,
    pub namespace: Option<String>,
    pub namespace_from_package: Option<bool>,
    pub package_json: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub parallel: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.out_dir.is_some() {
            self.out_dir = other.out_dir;
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        if other.ignore_patterns.is_some() {
            self.ignore_patterns = other.ignore_patterns;
        }
        if other.namespace.is_some() {
            self.namespace = other.namespace;
        }
        if other.namespace_from_package.is_some() {
            self.namespace_from_package = other.namespace_from_package;
        }
        if other.package_json.is_some() {
            self.package_json = other.package_json;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(out_dir) = &self.out_dir {
            settings.out_dir = out_dir.clone();
        }
        if let Some(pattern) = &self.pattern {
            settings.pattern = pattern.clone();
        }
        if let Some(ignore_patterns) = &self.ignore_patterns {
            settings.ignore_patterns = ignore_patterns.clone();
        }
        if let Some(namespace) = &self.namespace {
            settings.namespace = Some(namespace.clone());
        }
        if let Some(namespace_from_package) = self.namespace_from_package {
            settings.namespace_from_package = namespace_from_package;
        }
        if let Some(package_json) = &self.package_json {
            settings.package_json = package_json.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
