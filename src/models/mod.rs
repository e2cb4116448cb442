//! Data models for edge-timing captures

use crate::defaults::MICROS_PER_SECOND;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Polarity of a captured signal transition
///
/// The capture format encodes this as an integer flag: 0 for rising,
/// 1 for falling. Anything else violates the file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeType {
    /// Transition from logic-low to logic-high
    Rising,
    /// Transition from logic-high to logic-low
    Falling,
}

impl EdgeType {
    /// Numeric flag as stored in the capture CSV
    pub fn as_flag(&self) -> u8 {
        match self {
            EdgeType::Rising => 0,
            EdgeType::Falling => 1,
        }
    }
}

impl TryFrom<u8> for EdgeType {
    type Error = AppError;

    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(EdgeType::Rising),
            1 => Ok(EdgeType::Falling),
            other => Err(AppError::parse(format!(
                "invalid edge type flag {} (expected 0 for rising or 1 for falling)",
                other
            ))),
        }
    }
}

/// One row of an edge-timing capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSample {
    /// Timestamp of the edge within the capture, in seconds
    pub sample_time: f64,

    /// Polarity of this transition
    pub edge_type: EdgeType,

    /// Seconds since the previous edge of the same polarity
    pub same_edge_duration: f64,

    /// Seconds since the previous edge of the opposite polarity
    pub opposite_edge_duration: f64,
}

impl EdgeSample {
    /// Check whether this sample records a rising edge
    pub fn is_rising(&self) -> bool {
        self.edge_type == EdgeType::Rising
    }

    /// Falling-to-rising latency of this sample in microseconds
    ///
    /// Only meaningful for rising edges, where the opposite-edge duration is
    /// the elapsed time since the preceding falling edge.
    pub fn opposite_edge_micros(&self) -> f64 {
        self.opposite_edge_duration * MICROS_PER_SECOND
    }
}

/// Ordered falling-to-rising latencies in microseconds
///
/// Derived from the rising-edge rows of a capture and immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyDataset {
    values: Vec<f64>,
}

impl LatencyDataset {
    /// Build the dataset from raw capture samples
    ///
    /// Keeps only rising-edge rows, extracts their opposite-edge duration,
    /// and rescales from seconds to microseconds. Row order is preserved.
    pub fn from_samples(samples: &[EdgeSample]) -> Self {
        let values = samples
            .iter()
            .filter(|s| s.is_rising())
            .map(|s| s.opposite_edge_micros())
            .collect();
        Self { values }
    }

    /// Build a dataset directly from microsecond values (primarily for tests
    /// and benchmarks)
    pub fn from_micros(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Latency values in original capture order
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
