//! Edge Latency Analyzer - Main CLI Application
//!
//! Reads an edge-timing capture CSV, computes falling-to-rising latency
//! statistics, and renders the empirical CDF as a PNG.

use clap::Parser;
use edge_latency_analyzer::{
    app::App,
    cli::Cli,
    error::{AppError, Result},
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let use_color = cli.use_colors();

    if let Err(e) = run_application(cli) {
        eprintln!("{}", e.format_for_console(use_color));

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    let app = App::new(cli)?;
    app.run()?;
    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::FileNotFound(_) => {
            eprintln!();
            eprintln!("File help:");
            eprintln!("  - Check that the path is spelled correctly");
            eprintln!("  - Use an absolute path if the file is outside the working directory");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Format help:");
            eprintln!("  - The capture must be a CSV with one title row followed by data rows");
            eprintln!("  - Data rows: SampleTime,EdgeType,SameEdgeDuration,OppositeEdgeDuration");
            eprintln!("  - EdgeType must be 0 (rising) or 1 (falling)");
        }
        AppError::EmptyDataset(_) => {
            eprintln!();
            eprintln!("Data help:");
            eprintln!("  - The capture contains no rising-edge events to analyze");
            eprintln!("  - Verify the capture tool recorded both edge polarities");
        }
        AppError::Render(_) => {
            eprintln!();
            eprintln!("Render help:");
            eprintln!("  - Check that the output directory exists and is writable");
            eprintln!("  - Use --output-dir to write the plot elsewhere");
        }
        _ => {}
    }
}
