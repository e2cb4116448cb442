//! Colored console output formatting

use crate::error::Result;
use crate::output::formatter::{statistics_lines, FormattingOptions, OutputFormatter};
use crate::stats::SummaryStats;
use colored::Colorize;

/// Formatter that decorates output with ANSI colors
pub struct ColoredFormatter {
    options: FormattingOptions,
}

impl ColoredFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_header(&self, title: &str) -> Result<String> {
        let underline = "=".repeat(title.chars().count());
        Ok(format!("{}\n{}", title.bold().cyan(), underline.cyan()))
    }

    fn format_statistics(&self, stats: &SummaryStats) -> Result<String> {
        let block = statistics_lines(stats);
        let mut lines = block.lines();

        // First line is the section title; value lines stay uncolored so the
        // numbers remain copy-paste friendly.
        let title = lines.next().unwrap_or_default().bold().to_string();
        let rest: Vec<&str> = lines.collect();

        let mut out = title;
        for line in rest {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        Ok(out)
    }

    fn format_progress(&self, message: &str) -> Result<String> {
        if self.options.verbose_mode {
            Ok(format!("{} {}", "→".blue(), message))
        } else {
            Ok(message.to_string())
        }
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(message.green().to_string())
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "Warning:".yellow().bold(), warning.yellow()))
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", "Error:".red().bold(), error.red()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatencyDataset;

    fn formatter() -> ColoredFormatter {
        ColoredFormatter::new(FormattingOptions {
            enable_color: true,
            verbose_mode: false,
        })
    }

    #[test]
    fn test_statistics_values_survive_coloring() {
        let stats =
            SummaryStats::from_dataset(&LatencyDataset::from_micros(vec![500.0, 400.0])).unwrap();
        let block = formatter().format_statistics(&stats).unwrap();

        assert!(block.contains("Count: 2"));
        assert!(block.contains("Mean: 450.000 µs"));
        assert!(block.contains("Median: 450.000 µs"));
        assert!(block.contains("Min: 400.000 µs"));
        assert!(block.contains("Max: 500.000 µs"));
    }

    #[test]
    fn test_messages_contain_original_text() {
        let f = formatter();
        assert!(f.format_warning("w").unwrap().contains('w'));
        assert!(f.format_error("e").unwrap().contains('e'));
        assert!(f.format_success("s").unwrap().contains('s'));
    }
}
