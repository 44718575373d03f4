//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub out_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub namespace: Option<String>,
    pub namespace_from_package: bool,
    pub package_json: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub no_parallel: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30, // Highest priority
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            out_dir: args.out_dir.clone(),
            pattern: args.pattern.clone(),
            ignore: if args.ignore.is_empty() { None } else { Some(args.ignore.clone()) },
            namespace: args.namespace.clone(),
            namespace_from_package: args.namespace_from_package,
            package_json: args.package_json.clone(),
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            no_parallel: args.no_parallel,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(out_dir) = &self.args.out_dir {
            settings.out_dir = Some(out_dir.clone());
        }

        if let Some(pattern) = &self.args.pattern {
            settings.pattern = Some(pattern.clone());
        }

        if let Some(ignore) = &self.args.ignore {
            settings.ignore_patterns = Some(ignore.clone());
        }

        if let Some(namespace) = &self.args.namespace {
            settings.namespace = Some(namespace.clone());
        }

        if let Some(package_json) = &self.args.package_json {
            settings.package_json = Some(package_json.clone());
        }

        if let Some(format) = self.args.output_format {
            settings.output_format = Some(format);
        }

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Boolean flags only override when set
        if self.args.namespace_from_package {
            settings.namespace_from_package = Some(true);
        }

        if self.args.no_parallel {
            settings.parallel = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
