//! Command-line interface for the edge latency analyzer

use crate::error::{AppError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Edge Latency Analyzer - CDF analysis of falling-to-rising edge latency
#[derive(Parser, Debug, Clone)]
#[command(name = "edge-latency-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the edge-timing capture CSV; prompted for interactively when omitted
    pub input: Option<PathBuf>,

    /// Directory where the rendered PNG is written
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not open the rendered plot in the system image viewer
    #[arg(long)]
    pub no_display: bool,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output (structured JSON log entries)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if let Some(dir) = &self.output_dir {
            if dir.exists() && !dir.is_dir() {
                return Err(format!(
                    "--output-dir '{}' exists but is not a directory",
                    dir.display()
                ));
            }
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }

    /// Resolve the input capture path, prompting on stdin when not given
    pub fn resolve_input(&self) -> Result<PathBuf> {
        if let Some(path) = &self.input {
            return Ok(path.clone());
        }

        let raw: String = dialoguer::Input::new()
            .with_prompt("Enter the path to the CSV file")
            .interact_text()
            .map_err(|e| AppError::validation(format!("could not read input path: {}", e)))?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("no input path provided"));
        }

        Ok(PathBuf::from(trimmed))
    }

    /// Directory receiving the PNG artifact; defaults to the working directory
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Configuration Summary:\n");
        if let Some(input) = &self.input {
            summary.push_str(&format!("  Input: {}\n", input.display()));
        }
        summary.push_str(&format!(
            "  Output directory: {}\n",
            self.resolve_output_dir().display()
        ));
        summary.push_str(&format!("  Open viewer: {}\n", !self.no_display));
        summary.push_str(&format!("  Colored output: {}\n", self.use_colors()));
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => cfg!(windows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ela").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_input() {
        let cli = parse(&["capture.csv"]);
        assert_eq!(cli.input, Some(PathBuf::from("capture.csv")));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_color_conflict_rejected() {
        let cli = parse(&["capture.csv", "--color", "--no-color"]);
        let err = cli.validate().unwrap_err();
        assert!(err.contains("--color"));
    }

    #[test]
    fn test_no_color_flag_wins() {
        let cli = parse(&["capture.csv", "--no-color"]);
        assert!(!cli.use_colors());
    }

    #[test]
    fn test_color_flag_forces_color() {
        let cli = parse(&["capture.csv", "--color"]);
        assert!(cli.use_colors());
    }

    #[test]
    fn test_output_dir_defaults_to_cwd() {
        let cli = parse(&["capture.csv"]);
        assert_eq!(cli.resolve_output_dir(), PathBuf::from("."));

        let cli = parse(&["capture.csv", "--output-dir", "/tmp/plots"]);
        assert_eq!(cli.resolve_output_dir(), PathBuf::from("/tmp/plots"));
    }

    #[test]
    fn test_resolve_input_uses_argument() {
        let cli = parse(&["capture.csv"]);
        assert_eq!(cli.resolve_input().unwrap(), PathBuf::from("capture.csv"));
    }

    #[test]
    fn test_config_summary_mentions_key_settings() {
        let cli = parse(&["capture.csv", "--no-display", "--verbose"]);
        let summary = cli.get_config_summary();
        assert!(summary.contains("capture.csv"));
        assert!(summary.contains("Open viewer: false"));
        assert!(summary.contains("Verbose mode: true"));
    }
}
