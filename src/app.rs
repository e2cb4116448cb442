//! Main application orchestration and execution
//!
//! Runs the analysis pipeline top to bottom: load the capture, derive the
//! rising-edge latency dataset, summarize it, render the CDF, and report.

use crate::{
    cli::Cli,
    error::{AppError, Result},
    loader::load_edge_samples,
    logging::Logger,
    models::LatencyDataset,
    output::{OutputFormatter, OutputFormatterFactory},
    plot::{open_in_viewer, plot_output_path, render_cdf},
    stats::{CdfCurve, SummaryStats},
};
use std::path::PathBuf;

/// Outcome of a completed analysis run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Capture file that was analyzed
    pub input: PathBuf,
    /// Total rows in the capture (all edge polarities)
    pub sample_count: usize,
    /// Rising-edge rows that contributed latencies
    pub rising_count: usize,
    /// Summary statistics over the latency dataset
    pub stats: SummaryStats,
    /// Where the CDF plot was written
    pub plot_path: PathBuf,
}

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
    logger: Logger,
    formatter: Box<dyn OutputFormatter>,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Result<Self> {
        if let Err(msg) = cli.validate() {
            return Err(AppError::validation(msg));
        }

        let use_colors = cli.use_colors();
        let logger = Logger::from_flags(cli.debug, cli.verbose, use_colors);
        let formatter = OutputFormatterFactory::create_formatter(use_colors, cli.verbose);

        Ok(Self {
            cli,
            logger,
            formatter,
        })
    }

    /// Run the full analysis pipeline
    pub fn run(&self) -> Result<AnalysisReport> {
        if self.cli.debug {
            println!("{} v{}", crate::PKG_NAME, crate::VERSION);
            println!("{}", self.cli.get_config_summary());
        }

        let input = self.cli.resolve_input()?;

        println!(
            "{}",
            self.formatter
                .format_progress(&format!("Reading data from {}...", input.display()))?
        );

        let samples = load_edge_samples(&input)?;
        self.logger.debug(
            "loader",
            &format!("loaded {} edge samples from capture", samples.len()),
        );

        let dataset = LatencyDataset::from_samples(&samples);
        self.logger.debug(
            "filter",
            &format!(
                "{} rising-edge samples of {} total",
                dataset.len(),
                samples.len()
            ),
        );

        // Summary statistics refuse an empty dataset; surface that here with
        // the capture context attached.
        let stats = SummaryStats::from_dataset(&dataset).map_err(|e| match e {
            AppError::EmptyDataset(_) => AppError::empty_dataset(format!(
                "no rising-edge samples found in {}",
                input.display()
            )),
            other => other,
        })?;

        println!();
        println!("{}", self.formatter.format_statistics(&stats)?);

        let curve = CdfCurve::from_dataset(&dataset)?;
        let output_dir = self.cli.resolve_output_dir();
        std::fs::create_dir_all(&output_dir).map_err(|e| {
            AppError::io(format!(
                "could not create output directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;
        let plot_path = plot_output_path(&input, &output_dir);

        self.logger
            .debug("plot", &format!("rendering CDF to {}", plot_path.display()));
        render_cdf(&curve, &stats, &plot_path)?;

        println!(
            "{}",
            self.formatter
                .format_success(&format!("Plot saved as {}", plot_path.display()))?
        );

        if !self.cli.no_display {
            // Viewer availability is environment-dependent; the PNG exists
            // regardless, so a spawn failure is only worth a warning.
            if let Err(e) = open_in_viewer(&plot_path) {
                println!("{}", self.formatter.format_warning(&e.to_string())?);
            }
        }

        Ok(AnalysisReport {
            input,
            sample_count: samples.len(),
            rising_count: dataset.len(),
            stats,
            plot_path,
        })
    }
}
