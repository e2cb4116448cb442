//! CSV ingestion for edge-timing captures
//!
//! The capture export is positional: a single title row followed by data
//! rows of `SampleTime,EdgeType,SameEdgeDuration,OppositeEdgeDuration` with
//! no per-column header names. The schema is checked once here, at load
//! time, so malformed files fail fast with a line number instead of
//! surfacing later as a numeric error.

use crate::error::{AppError, Result};
use crate::models::{EdgeSample, EdgeType};
use csv::ReaderBuilder;
use std::path::Path;

/// Number of columns in a capture data row
pub const EXPECTED_COLUMNS: usize = 4;

/// Load all edge samples from a capture CSV
///
/// The first row is a title/header and is discarded unconditionally. Rows
/// are returned in file order.
pub fn load_edge_samples(path: &Path) -> Result<Vec<EdgeSample>> {
    if !path.exists() {
        return Err(AppError::file_not_found(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut samples = Vec::new();

    // Line numbering is 1-based and includes the discarded title row, so
    // reported positions match what an editor shows.
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 1;

        if line == 1 {
            continue;
        }

        if record.len() != EXPECTED_COLUMNS {
            return Err(AppError::parse(format!(
                "expected {} columns, found {} at line {}",
                EXPECTED_COLUMNS,
                record.len(),
                line
            )));
        }

        samples.push(parse_record(&record, line)?);
    }

    Ok(samples)
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<EdgeSample> {
    let sample_time = parse_float(record.get(0), "SampleTime", line)?;
    let edge_flag = parse_edge_flag(record.get(1), line)?;
    let same_edge_duration = parse_float(record.get(2), "SameEdgeDuration", line)?;
    let opposite_edge_duration = parse_float(record.get(3), "OppositeEdgeDuration", line)?;

    Ok(EdgeSample {
        sample_time,
        edge_type: EdgeType::try_from(edge_flag)
            .map_err(|e| AppError::parse(format!("{} at line {}", e, line)))?,
        same_edge_duration,
        opposite_edge_duration,
    })
}

fn parse_float(field: Option<&str>, column: &str, line: usize) -> Result<f64> {
    let raw = field.unwrap_or_default().trim();
    raw.parse::<f64>().map_err(|_| {
        AppError::parse(format!(
            "invalid {} value '{}' at line {}",
            column, raw, line
        ))
    })
}

fn parse_edge_flag(field: Option<&str>, line: usize) -> Result<u8> {
    let raw = field.unwrap_or_default().trim();
    raw.parse::<u8>().map_err(|_| {
        AppError::parse(format!(
            "invalid EdgeType value '{}' at line {} (expected 0 or 1)",
            raw, line
        ))
    })
}
