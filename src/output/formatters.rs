//! Output formatting functionality
//!
//! Renders a [`ConversionReport`] as text or JSON.

use crate::error::{ConvertError, Result};
use crate::models::declaration::OutputShape;
use crate::models::report::{ConversionFailure, ConversionReport, ConvertedFile};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use std::path::Path;

/// Format one converted document
pub fn format_converted_text(file: &ConvertedFile, use_colors: bool) -> String {
    let detail = match (&file.shape, &file.namespace) {
        (OutputShape::Namespace, Some(name)) => format!("namespace {}", name),
        (shape, _) => shape.to_string(),
    };

    if use_colors {
        format!(
            "✅ Converted {} → {} {}\n",
            file.source.display(),
            Green.paint(file.target.display().to_string()),
            Style::new().dimmed().paint(format!("({})", detail))
        )
    } else {
        format!(
            "✅ Converted {} → {} ({})\n",
            file.source.display(),
            file.target.display(),
            detail
        )
    }
}

/// Format one failed document
pub fn format_failure_text(failure: &ConversionFailure, use_colors: bool) -> String {
    let severity = if !use_colors {
        failure.severity.clone()
    } else if failure.severity == "WARNING" {
        Yellow.paint(failure.severity.as_str()).to_string()
    } else {
        Red.bold().paint(failure.severity.as_str()).to_string()
    };

    format!(
        "❌ Failed to convert {} [{}]: {}\n",
        failure.path.display(),
        severity,
        failure.error
    )
}

/// Format one skipped document
fn format_skipped_text(path: &Path, use_colors: bool) -> String {
    let line = format!("   Skipped {} (no declarations)", path.display());
    if use_colors {
        format!("{}\n", Style::new().dimmed().paint(line))
    } else {
        format!("{}\n", line)
    }
}

/// Format the full report as text
pub fn format_report_text(report: &ConversionReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    let header = format!(
        "Converting {} .d.ts files in {}",
        summary.discovered,
        report.out_dir.display()
    );
    if use_colors {
        output.push_str(&format!("{}\n\n", Cyan.bold().paint(header)));
    } else {
        output.push_str(&format!("{}\n\n", header));
    }

    for file in &report.converted {
        output.push_str(&format_converted_text(file, use_colors));
    }

    if verbose {
        for path in &report.skipped {
            output.push_str(&format_skipped_text(path, use_colors));
        }
    }

    for failure in &report.failures {
        output.push_str(&format_failure_text(failure, use_colors));
    }

    output.push('\n');
    output.push_str(&format_summary_line(report, use_colors));

    if verbose {
        output.push_str(&format!(
            "  Namespaces: {}\n  Default exports: {}\n  Empty modules: {}\n  Duration: {}\n",
            summary.namespaces,
            summary.default_exports,
            summary.empty_modules,
            summary.format_duration()
        ));
    }

    output
}

/// Final status line
pub fn format_summary_line(report: &ConversionReport, use_colors: bool) -> String {
    let summary = &report.summary;

    if report.has_failures() {
        let line = format!(
            "{} of {} .d.ts files failed to convert ({} converted, {} skipped)",
            summary.failed, summary.discovered, summary.converted, summary.skipped
        );
        if use_colors {
            format!("{}\n", Red.bold().paint(line))
        } else {
            format!("{}\n", line)
        }
    } else {
        let line = format!(
            "✨ All .d.ts files converted to .d.cts ({} converted, {} skipped in {})",
            summary.converted,
            summary.skipped,
            summary.format_duration()
        );
        if use_colors {
            format!("{}\n", Green.bold().paint(line))
        } else {
            format!("{}\n", line)
        }
    }
}

/// Format the report as pretty-printed JSON
pub fn format_report_json(report: &ConversionReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| ConvertError::JsonSerialize { source: e })
}
