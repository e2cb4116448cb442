//! Edge Latency Analyzer
//!
//! Ingests a CSV of digital-signal edge-timing samples produced by a
//! waveform capture tool, isolates rising-edge events, computes the latency
//! since the preceding falling edge, prints summary statistics, and renders
//! a cumulative distribution function plot as a PNG.

pub mod app;
pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod output;
pub mod plot;
pub mod stats;

// Re-export commonly used types
pub use app::{AnalysisReport, App};
pub use error::{AppError, Result};
pub use models::{EdgeSample, EdgeType, LatencyDataset};
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use stats::{CdfCurve, SummaryStats};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Default configuration values
pub mod defaults {
    /// Seconds-to-microseconds rescale factor applied to edge durations.
    pub const MICROS_PER_SECOND: f64 = 1_000_000.0;

    /// Suffix appended to the input file stem for the rendered plot.
    pub const PLOT_SUFFIX: &str = "_latency_cdf.png";
}
