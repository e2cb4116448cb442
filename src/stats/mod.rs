//! Statistical analysis of falling-to-rising edge latencies

use crate::error::{AppError, Result};
use crate::models::LatencyDataset;
use serde::{Deserialize, Serialize};

/// Summary statistics over a latency dataset, all in microseconds
///
/// Recomputed from the capture on every run; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of rising-edge samples included
    pub count: usize,

    /// Arithmetic mean latency (microseconds)
    pub mean: f64,

    /// Median latency, linear interpolation between middle elements for
    /// even-length input (microseconds)
    pub median: f64,

    /// Minimum latency (microseconds)
    pub min: f64,

    /// Maximum latency (microseconds)
    pub max: f64,

    /// Population standard deviation, dividing by N (microseconds)
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute summary statistics for a latency dataset
    pub fn from_dataset(dataset: &LatencyDataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(AppError::empty_dataset("no rising-edge samples found"));
        }

        let values = dataset.values();
        let count = values.len();
        let n = count as f64;

        let mean = values.iter().sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = percentile(&sorted, 50.0);
        let min = sorted[0];
        let max = sorted[count - 1];

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Ok(Self {
            count,
            mean,
            median,
            min,
            max,
            std_dev,
        })
    }
}

/// Calculate a percentile over an ascending-sorted slice
///
/// Uses linear interpolation between the two neighbouring ranks, matching
/// the standard definition (the 50th percentile of an even-length input is
/// the average of the two middle elements).
pub fn percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }

    let index = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
    let lower_index = index.floor() as usize;
    let upper_index = index.ceil() as usize;

    if lower_index == upper_index {
        sorted_values[lower_index]
    } else {
        let lower_value = sorted_values[lower_index];
        let upper_value = sorted_values[upper_index];
        let weight = index - lower_index as f64;
        lower_value + weight * (upper_value - lower_value)
    }
}

/// Empirical cumulative distribution over a latency dataset
///
/// The i-th smallest of N values (1-indexed) is assigned cumulative
/// probability i/N, so the curve is monotone non-decreasing and ends at
/// exactly 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfCurve {
    points: Vec<(f64, f64)>,
}

impl CdfCurve {
    /// Build the empirical CDF from a latency dataset
    pub fn from_dataset(dataset: &LatencyDataset) -> Result<Self> {
        if dataset.is_empty() {
            return Err(AppError::empty_dataset(
                "cannot build a CDF over zero samples",
            ));
        }

        let mut sorted = dataset.values().to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let total = sorted.len() as f64;
        let points = sorted
            .into_iter()
            .enumerate()
            .map(|(index, value)| (value, (index + 1) as f64 / total))
            .collect();

        Ok(Self { points })
    }

    /// (latency, cumulative probability) pairs in ascending latency order
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest latency on the curve
    pub fn x_min(&self) -> f64 {
        self.points[0].0
    }

    /// Largest latency on the curve
    pub fn x_max(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }
}
