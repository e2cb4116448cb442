//! CDF plot rendering
//!
//! Draws the empirical CDF of falling-to-rising edge latencies as a PNG
//! using the [`plotters`] bitmap backend, with vertical reference lines at
//! the mean and median. The backend's built-in font rendering keeps this
//! working in headless environments (CI, containers).

use crate::defaults::PLOT_SUFFIX;
use crate::error::{AppError, Result};
use crate::stats::{CdfCurve, SummaryStats};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Pixel dimensions of the rendered chart
///
/// Equivalent to a 10in x 6in raster at 300 DPI.
pub const PLOT_WIDTH: u32 = 3000;
pub const PLOT_HEIGHT: u32 = 1800;

const CHART_TITLE: &str = "Cumulative Distribution Function (CDF) of Falling→Rising Edge Latency";

/// Derive the output PNG path from the input capture path
///
/// `capture.csv` becomes `<output_dir>/capture_latency_cdf.png`. The name is
/// deterministic so repeated runs overwrite the same artifact.
pub fn plot_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "capture".to_string());
    output_dir.join(format!("{}{}", stem, PLOT_SUFFIX))
}

/// Format an axis tick value as a plain decimal
///
/// Never scientific notation and never an offset, so tick labels read as the
/// literal microsecond values.
fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 100.0 {
        format!("{:.0}", value)
    } else if abs >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// X-axis range with a small margin, widened when the data is degenerate
fn x_axis_range(curve: &CdfCurve) -> (f64, f64) {
    let mut x_min = curve.x_min();
    let mut x_max = curve.x_max();

    if x_min >= x_max {
        // Single distinct value; pad so the chart stays drawable
        let pad = if x_max.abs() > f64::EPSILON {
            x_max.abs() * 0.1
        } else {
            1.0
        };
        x_min -= pad;
        x_max += pad;
    } else {
        let pad = (x_max - x_min) * 0.02;
        x_min -= pad;
        x_max += pad;
    }

    (x_min, x_max)
}

/// Render the CDF curve with mean/median reference lines to a PNG
pub fn render_cdf(curve: &CdfCurve, stats: &SummaryStats, output_path: &Path) -> Result<()> {
    if curve.is_empty() {
        return Err(AppError::empty_dataset("cannot plot an empty CDF"));
    }

    let root = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| AppError::render(format!("failed to fill drawing area: {}", e)))?;

    let (x_min, x_max) = x_axis_range(curve);

    let mut chart = ChartBuilder::on(&drawing_area)
        .caption(CHART_TITLE, ("sans-serif", 60))
        .margin(40)
        .x_label_area_size(120)
        .y_label_area_size(160)
        .build_cartesian_2d(x_min..x_max, 0.0..1.05f64)
        .map_err(|e| AppError::render(format!("failed to configure chart: {}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Latency (microseconds)")
        .y_desc("Cumulative Probability")
        .x_label_style(("sans-serif", 45))
        .y_label_style(("sans-serif", 45))
        .label_style(("sans-serif", 35))
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .light_line_style(BLACK.mix(0.1))
        .draw()
        .map_err(|e| AppError::render(format!("failed to draw chart mesh: {}", e)))?;

    // Main CDF curve
    chart
        .draw_series(LineSeries::new(
            curve.points().iter().cloned(),
            BLUE.stroke_width(4),
        ))
        .map_err(|e| AppError::render(format!("failed to draw CDF series: {}", e)))?;

    // Vertical dashed line at the mean
    chart
        .draw_series(DashedLineSeries::new(
            vertical_line(stats.mean),
            20,
            12,
            RED.stroke_width(3),
        ))
        .map_err(|e| AppError::render(format!("failed to draw mean line: {}", e)))?
        .label(format!("Mean: {:.3} µs", stats.mean))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], RED.stroke_width(3)));

    // Vertical short-dash line at the median (dash-dot stand-in)
    chart
        .draw_series(DashedLineSeries::new(
            vertical_line(stats.median),
            8,
            10,
            GREEN.stroke_width(3),
        ))
        .map_err(|e| AppError::render(format!("failed to draw median line: {}", e)))?
        .label(format!("Median: {:.3} µs", stats.median))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], GREEN.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .label_font(("sans-serif", 40))
        .draw()
        .map_err(|e| AppError::render(format!("failed to draw legend: {}", e)))?;

    drawing_area
        .present()
        .map_err(|e| AppError::render(format!("failed to save plot: {}", e)))?;

    Ok(())
}

/// Sampled points of a vertical reference line spanning the probability axis
fn vertical_line(x: f64) -> Vec<(f64, f64)> {
    // DashedLineSeries needs intermediate points to break into dashes
    (0..=100).map(|i| (x, i as f64 / 100.0)).collect()
}

/// Open the rendered PNG with the platform's default image viewer
///
/// Replaces the interactive figure display of typical plotting environments.
/// Failure to spawn a viewer is reported to the caller as an `Err` so it can
/// be downgraded to a warning; the PNG artifact already exists either way.
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = viewer_command(path);
    command
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::io(format!("could not open image viewer: {}", e)))
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
