//! CLI integration tests for the edge latency analyzer
//!
//! These run the compiled binary against real capture files and check the
//! console output, exit codes, and (where fonts allow) the PNG artifact.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("ela").unwrap()
}

/// Capture matching the documented reference scenario: two rising edges
/// with falling-to-rising latencies of 500 µs and 400 µs.
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
fn test_missing_file_reports_file_not_found() {
    create_test_cmd()
        .arg("/no/such/capture.csv")
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("[FILE]"))
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_malformed_row_reports_parse_error_with_line() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "bad.csv", "t,edge,same,opp\n0.0,1,0.0\n");

    create_test_cmd()
        .arg(capture)
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("expected 4 columns, found 3 at line 2"));
}

#[test]
fn test_invalid_edge_flag_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "flags.csv", "t,edge,same,opp\n0.0,7,0.0,0.0\n");

    create_test_cmd()
        .arg(capture)
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("[PARSE]"));
}

#[test]
fn test_no_rising_edges_reports_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(
        &dir,
        "falling_only.csv",
        "t,edge,same,opp\n0.0,1,0.0,0.0\n0.001,1,0.0005,0.0005\n",
    );

    create_test_cmd()
        .arg(capture)
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("no rising-edge samples found"));
}

#[test]
fn test_header_only_capture_reports_empty_dataset() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "empty.csv", "t,edge,same,opp\n");

    create_test_cmd()
        .arg(capture)
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_conflicting_color_flags_rejected() {
    create_test_cmd()
        .arg("capture.csv")
        .arg("--color")
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--no-color"));
}

#[test]
fn test_progress_message_printed_before_failure() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(
        &dir,
        "falling_only.csv",
        "t,edge,same,opp\n0.0,1,0.0,0.0\n",
    );

    create_test_cmd()
        .arg(&capture)
        .arg("--no-color")
        .arg("--no-display")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Reading data from"))
        .stdout(predicate::str::contains("falling_only.csv"));
}

#[test]
fn test_lopsided_capture_succeeds_with_clean_stderr() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(
        &dir,
        "lopsided.csv",
        "t,edge,same,opp\n\
         0.0,1,0.0,0.0\n\
         0.001,1,0.0005,0.0005\n\
         0.002,1,0.0007,0.0007\n\
         0.003,0,0.0004,0.0004\n",
    );

    create_test_cmd()
        .arg(&capture)
        .arg("--no-color")
        .arg("--no-display")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Count: 1"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_scenario_capture_end_to_end() {
    let dir = TempDir::new().unwrap();
    let capture = write_capture(&dir, "scenario.csv", SCENARIO_CSV);

    create_test_cmd()
        .arg(&capture)
        .arg("--no-color")
        .arg("--no-display")
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Falling→Rising Edge Latency Statistics (microseconds):",
        ))
        .stdout(predicate::str::contains("Count: 2"))
        .stdout(predicate::str::contains("Mean: 450.000 µs"))
        .stdout(predicate::str::contains("Median: 450.000 µs"))
        .stdout(predicate::str::contains("Min: 400.000 µs"))
        .stdout(predicate::str::contains("Max: 500.000 µs"))
        .stdout(predicate::str::contains("Plot saved as"));

    let plot = dir.path().join("scenario_latency_cdf.png");
    assert!(plot.exists());
    assert!(fs::metadata(&plot).unwrap().len() > 0);
}
