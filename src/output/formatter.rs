//! Core formatting traits and implementations
//!
//! Defines the output formatting interface and provides the plain text
//! implementation.

use crate::error::Result;
use crate::stats::SummaryStats;
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a header section
    fn format_header(&self, title: &str) -> Result<String>;

    /// Format the latency statistics block
    fn format_statistics(&self, stats: &SummaryStats) -> Result<String>;

    /// Format a progress message
    fn format_progress(&self, message: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Render the statistics block shared by all formatters
///
/// All six quantities use 3-decimal fixed point with a µs suffix; mean and
/// median get dedicated lines.
pub(crate) fn statistics_lines(stats: &SummaryStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Falling→Rising Edge Latency Statistics (microseconds):");
    let _ = writeln!(out, "Count: {}", stats.count);
    let _ = writeln!(out, "Mean: {:.3} µs", stats.mean);
    let _ = writeln!(out, "Median: {:.3} µs", stats.median);
    let _ = writeln!(out, "Min: {:.3} µs", stats.min);
    let _ = writeln!(out, "Max: {:.3} µs", stats.max);
    let _ = writeln!(out, "Std Dev: {:.3} µs", stats.std_dev);
    out
}

/// Plain text formatter without color codes
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        Ok(format!("{}\n{}", title, "=".repeat(title.chars().count())))
    }

    fn format_statistics(&self, stats: &SummaryStats) -> Result<String> {
        Ok(statistics_lines(stats))
    }

    fn format_progress(&self, message: &str) -> Result<String> {
        if self.options.verbose_mode {
            Ok(format!("-> {}", message))
        } else {
            Ok(message.to_string())
        }
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(message.to_string())
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("Warning: {}", warning))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("Error: {}", error))
    }
}
