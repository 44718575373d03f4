//! Parallel processing utilities

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Progress update information for batch operations
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    /// Create a new progress update
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }

    /// Calculate progress percentage
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64) * 100.0
        }
    }
}

/// Execute a function on every item with progress reporting
///
/// Results keep the input order whether or not `parallel` is set. The
/// callback receives one update per finished item; in parallel mode the
/// updates arrive in completion order.
pub fn process_with_progress<T, F, R, M, P>(
    items: Vec<T>,
    parallel: bool,
    f: F,
    describe: M,
    progress_callback: P,
) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(&T) -> R + Send + Sync,
    M: Fn(&T) -> String + Send + Sync,
    P: Fn(ProgressUpdate) + Send + Sync,
{
    let total = items.len();
    let counter = AtomicUsize::new(0);

    let run = |item: T| {
        let result = f(&item);
        let current = counter.fetch_add(1, Ordering::SeqCst) + 1;
        progress_callback(ProgressUpdate::new(current, total, describe(&item)));
        result
    };

    if parallel {
        items.into_par_iter().map(run).collect()
    } else {
        items.into_iter().map(run).collect()
    }
}
