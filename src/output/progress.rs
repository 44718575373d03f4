//! Progress reporting functionality
//!
//! Draws a progress bar on stderr while documents are converted, so the
//! report written to stdout stays clean.

use crate::core::parallel::ProgressUpdate;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;

/// Progress reporter for a conversion run
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    ///
    /// No bar is drawn in quiet mode or when `show_bar` is false.
    pub fn new(quiet: bool, verbose: bool, show_bar: bool) -> Self {
        let bar = if quiet || !show_bar {
            None
        } else {
            let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(bar)
        };

        Self { quiet, verbose, bar }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if let Some(bar) = &self.bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_position(0);
            bar.set_message(operation.to_string());
        }

        if self.verbose {
            self.print(&format!("Starting: {}", operation));
        }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
            bar.set_message(message.to_string());
        }

        if self.verbose {
            self.print(&format!("[{}/{}] {}", current, total, message));
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Finish the progress operation and remove the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Print a message to stderr (respects quiet mode)
    pub fn print(&self, message: &str) {
        if self.quiet {
            return;
        }

        match &self.bar {
            Some(bar) => bar.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
