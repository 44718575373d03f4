//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_converted_text, format_failure_text, format_summary_line};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::ConversionReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a conversion report into a string
    fn format(&self, report: &ConversionReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &ConversionReport) -> Result<String> {
        // In quiet mode only failures are reported
        if self.quiet {
            let mut output = String::new();
            for failure in &report.failures {
                output.push_str(&format_failure_text(failure, self.use_colors));
            }
            if report.has_failures() {
                output.push_str(&format_summary_line(report, self.use_colors));
            }
            return Ok(output);
        }

        Ok(formatters::format_report_text(report, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &ConversionReport) -> Result<String> {
        formatters::format_report_json(report).map(|mut json| {
            json.push('\n');
            json
        })
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, verbose: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
