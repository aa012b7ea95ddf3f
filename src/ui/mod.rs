//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while a pack run writes archive entries
//! - An animated spinner using indicatif
//! - Silent progress for quiet mode and tests
//!
//! Collectors only see the ProgressReporter trait. Reporters are invoked from
//! several worker threads at once.

pub mod display;

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter trait for pack runs
pub trait ProgressReporter: Send + Sync {
    /// An entry was appended to the archive
    fn entry_archived(&self, key: &str);

    /// The archive was finalized
    fn finish(&self, entries: usize);

    /// Abandon on error
    fn abandon(&self);
}

/// Spinner showing the number of archived entries
pub struct SpinnerReporter {
    spinner: ProgressBar,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {pos} entries {msg}")
        {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self { spinner }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn entry_archived(&self, key: &str) {
        // Truncate long keys for display
        let display_key = if key.chars().count() > 50 {
            let tail: String = key
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            key.to_string()
        };
        self.spinner.set_message(display_key);
        self.spinner.inc(1);
    }

    fn finish(&self, entries: usize) {
        self.spinner
            .finish_with_message(format!("archive closed ({entries} entries)"));
    }

    fn abandon(&self) {
        self.spinner.abandon();
    }
}

/// Silent progress reporter (no output)
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn entry_archived(&self, _key: &str) {}

    fn finish(&self, _entries: usize) {}

    fn abandon(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_is_inert() {
        let reporter = SilentProgressReporter;
        reporter.entry_archived("shop/boot.js");
        reporter.finish(1);
        reporter.abandon();
    }

    #[test]
    fn test_spinner_counts_entries() {
        let reporter = SpinnerReporter::new();
        reporter.entry_archived("shop/boot.js");
        reporter.entry_archived(&"a/".repeat(40));
        assert_eq!(reporter.spinner.position(), 2);
        reporter.finish(2);
    }
}
