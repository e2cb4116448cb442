//! Library-level pipeline tests
//!
//! Exercise load → filter → summarize → CDF on real temp files without
//! touching the plot backend, so they run anywhere.

use edge_latency_analyzer::{
    loader::load_edge_samples,
    models::{EdgeType, LatencyDataset},
    plot::plot_output_path,
    stats::{CdfCurve, SummaryStats},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCENARIO_CSV: &str = "t,edge,same,opp\n\
0.0,1,0.0,0.0\n\
0.001,0,0.0005,0.0005\n\
0.002,1,0.0007,0.0007\n\
0.003,0,0.0004,0.0004\n";

fn write_capture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_scenario_capture_statistics() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "scenario.csv", SCENARIO_CSV);

    let samples = load_edge_samples(&capture).unwrap();
    assert_eq!(samples.len(), 4);

    let dataset = LatencyDataset::from_samples(&samples);
    assert_eq!(dataset.len(), 2);
    assert!((dataset.values()[0] - 500.0).abs() < 1e-9);
    assert!((dataset.values()[1] - 400.0).abs() < 1e-9);

    let stats = SummaryStats::from_dataset(&dataset).unwrap();
    assert_eq!(stats.count, 2);
    assert!((stats.mean - 450.0).abs() < 1e-9);
    assert!((stats.median - 450.0).abs() < 1e-9);
    assert!((stats.min - 400.0).abs() < 1e-9);
    assert!((stats.max - 500.0).abs() < 1e-9);
    assert!((stats.std_dev - 50.0).abs() < 1e-9);
}

#[test]
fn test_scenario_capture_cdf() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "scenario.csv", SCENARIO_CSV);

    let samples = load_edge_samples(&capture).unwrap();
    let dataset = LatencyDataset::from_samples(&samples);
    let curve = CdfCurve::from_dataset(&dataset).unwrap();

    // Sorted ascending with equal mass per point
    assert_eq!(curve.len(), 2);
    assert!((curve.points()[0].0 - 400.0).abs() < 1e-9);
    assert!((curve.points()[0].1 - 0.5).abs() < 1e-12);
    assert!((curve.points()[1].0 - 500.0).abs() < 1e-9);
    assert!((curve.points()[1].1 - 1.0).abs() < 1e-12);
}

#[test]
fn test_filter_only_keeps_rising_edges() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "mixed.csv", SCENARIO_CSV);

    let samples = load_edge_samples(&capture).unwrap();
    let rising: Vec<_> = samples.iter().filter(|s| s.is_rising()).collect();

    assert_eq!(rising.len(), 2);
    assert!(rising.iter().all(|s| s.edge_type == EdgeType::Rising));
}

#[test]
fn test_plot_name_derived_from_input_stem() {
    let dir = TempDir::new().unwrap();
    let path = plot_output_path(Path::new("bench_run.csv"), dir.path());
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "bench_run_latency_cdf.png"
    );
}

#[test]
fn test_larger_capture_round_numbers() {
    // 0.001s through 0.005s opposite-edge durations on rising edges
    let mut csv = String::from("t,edge,same,opp\n");
    for i in 1..=5 {
        let t = i as f64 * 0.01;
        csv.push_str(&format!("{},1,0.0,0.0\n", t));
        csv.push_str(&format!("{},0,0.0,{}\n", t + 0.005, i as f64 * 0.001));
    }

    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "ramp.csv", &csv);

    let samples = load_edge_samples(&capture).unwrap();
    let dataset = LatencyDataset::from_samples(&samples);
    let stats = SummaryStats::from_dataset(&dataset).unwrap();

    assert_eq!(stats.count, 5);
    assert!((stats.mean - 3000.0).abs() < 1e-6);
    assert!((stats.median - 3000.0).abs() < 1e-6);
    assert!((stats.min - 1000.0).abs() < 1e-6);
    assert!((stats.max - 5000.0).abs() < 1e-6);
}
