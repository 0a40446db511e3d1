//! Core measurement types shared by the statistics and analysis modules.

use serde::{Deserialize, Serialize};

use crate::constants::NULL_TIME;
use crate::error::{AnalysisError, Result};

/// Paired `(time, value)` observations, one pair per event.
///
/// Construction guarantees equal lengths, at least one pair, and only
/// finite non-negative entries, so downstream code can aggregate without
/// re-checking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl MeasurementSeries {
    /// Build a series from parallel vectors.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::LengthMismatch`] if the vectors differ in length
    /// - [`AnalysisError::EmptySeries`] if there are no observations
    /// - [`AnalysisError::SentinelValue`] if any entry is the null time
    /// - [`AnalysisError::NonFiniteValue`] for NaN or positive infinity
    /// - [`AnalysisError::NegativeValue`] for a negative time or value
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(AnalysisError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }

        for (index, (&t, &v)) in times.iter().zip(values.iter()).enumerate() {
            if t == NULL_TIME || v == NULL_TIME {
                return Err(AnalysisError::SentinelValue { index });
            }
            if !t.is_finite() || !v.is_finite() {
                return Err(AnalysisError::NonFiniteValue { index });
            }
            if t < 0.0 || v < 0.0 {
                return Err(AnalysisError::NegativeValue { index });
            }
        }

        Ok(Self { times, values })
    }

    /// Build a series from `(time, value)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let (times, values) = pairs.into_iter().unzip();
        Self::new(times, values)
    }

    /// Observation timestamps.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Observation values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over `(time, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

/// Partition of `[start_time, end_time)` into equal half-open batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchWindow {
    /// Width of each batch.
    pub batch_time: f64,
    /// Inclusive start of the first batch.
    pub start_time: f64,
    /// Exclusive upper bound; the trailing partial batch is dropped.
    pub end_time: f64,
}

impl BatchWindow {
    /// Create a window, rejecting non-positive widths and non-finite bounds.
    ///
    /// `end_time < start_time` is accepted and describes zero batches.
    pub fn new(batch_time: f64, start_time: f64, end_time: f64) -> Result<Self> {
        if !batch_time.is_finite() || batch_time <= 0.0 {
            return Err(AnalysisError::invalid(
                "batch_time",
                format!("must be finite and > 0, got {}", batch_time),
            ));
        }
        if !start_time.is_finite() {
            return Err(AnalysisError::invalid(
                "start_time",
                format!("must be finite, got {}", start_time),
            ));
        }
        if !end_time.is_finite() {
            return Err(AnalysisError::invalid(
                "end_time",
                format!("must be finite, got {}", end_time),
            ));
        }
        Ok(Self {
            batch_time,
            start_time,
            end_time,
        })
    }

    /// `max(0, floor((end - start) / batch_time))`.
    pub fn num_batches(&self) -> usize {
        let span = self.end_time - self.start_time;
        if span <= 0.0 {
            return 0;
        }
        (span / self.batch_time).floor() as usize
    }

    /// Index of the batch containing `time`, if it is one of the included ones.
    ///
    /// Batches are left-closed, right-open: a time exactly on the boundary
    /// `start + k * batch_time` lands in batch `k`.
    pub fn batch_index(&self, time: f64) -> Option<usize> {
        let offset = (time - self.start_time) / self.batch_time;
        if offset < 0.0 {
            return None;
        }
        let index = offset.floor() as usize;
        (index < self.num_batches()).then_some(index)
    }

    /// Bounds `[start, end)` of batch `index`.
    pub fn bounds(&self, index: usize) -> (f64, f64) {
        let lo = self.start_time + index as f64 * self.batch_time;
        (lo, lo + self.batch_time)
    }
}
