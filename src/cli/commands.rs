//! Command implementations

use std::path::PathBuf;
use std::sync::Arc;

use super::Args;
use crate::config::{self, CliArgs, CONFIG_FILE_NAME};
use crate::core::Converter;
use crate::error::{ConvertError, Result};
use crate::models::config::Settings;
use crate::models::report::ConversionReport;
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Convert the declaration documents selected by the arguments
    Convert(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Convert(args)
    }

    /// Execute the command
    ///
    /// A conversion run that recorded per-document failures still writes its
    /// report, then returns [`ConvertError::BatchFailures`].
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Convert(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                let report = convert(&settings)?;
                write_report(&report, &settings)?;

                if report.has_failures() {
                    return Err(ConvertError::BatchFailures {
                        failed: report.summary.failed,
                        total: report.summary.discovered,
                    });
                }

                Ok(())
            }
            Command::Init => init_config(PathBuf::from(CONFIG_FILE_NAME)),
        }
    }
}

/// Run the conversion with progress reporting
pub fn convert(settings: &Settings) -> Result<ConversionReport> {
    if settings.verbose {
        tracing::debug!(?settings, "resolved settings");
    }

    let converter = Converter::new(settings.clone())?;
    let reporter = Arc::new(ProgressReporter::new(
        settings.quiet,
        settings.verbose,
        settings.show_progress,
    ));

    reporter.start(0, &format!("Converting .d.ts files in {}", settings.out_dir.display()));
    let report = converter.convert_all_with_progress(create_progress_callback(Arc::clone(&reporter)));
    reporter.finish();

    report
}

/// Format the report and send it to stdout or the report file
pub fn write_report(report: &ConversionReport, settings: &Settings) -> Result<()> {
    let formatter = create_formatter(
        settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let content = formatter.format(report)?;

    if content.is_empty() {
        return Ok(());
    }

    create_writer(settings.output_file.as_ref()).write(&content)
}

/// Write the default configuration template unless the file already exists
pub fn init_config(config_path: PathBuf) -> Result<()> {
    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("\nEvery setting is commented out; uncomment the ones you want to change:");
    println!("  - out_dir: directory containing the emitted .d.ts files");
    println!("  - pattern / ignore_patterns: which declaration files to convert");
    println!("  - namespace / namespace_from_package: namespace naming");
    println!("  - output_format: report format (text, json)");

    Ok(())
}
