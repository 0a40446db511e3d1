//! Batch-means partitioning of a time-stamped measurement series.
//!
//! The window `[start, end)` is cut into `floor((end - start) / w)` equal,
//! contiguous, half-open batches of width `w`. Each observation is assigned
//! by its timestamp alone; observations before `start` or at/after the end of
//! the last full batch are dropped. Warm-up and cool-down periods are removed
//! by shifting `start` and `end` inward before partitioning.
//!
//! An included batch with no observations is an error: a zero mean would be
//! indistinguishable from a real measurement.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::types::{BatchWindow, MeasurementSeries};

/// Per-batch means and observation counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchMeans {
    /// Mean value per batch, in batch order.
    pub means: Vec<f64>,
    /// Number of observations per batch. Every entry is > 0.
    pub counts: Vec<usize>,
}

impl BatchMeans {
    /// The valid zero-batch result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of batches.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// True when the window was too short for a single batch.
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// Total observations that landed in some batch.
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Running per-batch totals.
///
/// Accumulators over disjoint slices of a series can be merged, which is how
/// the parallel path reduces per-thread state.
#[derive(Debug, Clone)]
pub struct BatchAccumulator {
    window: BatchWindow,
    totals: Vec<f64>,
    counts: Vec<usize>,
    excluded: usize,
}

impl BatchAccumulator {
    /// Create an empty accumulator for `window`.
    pub fn new(window: BatchWindow) -> Self {
        let n = window.num_batches();
        Self {
            window,
            totals: vec![0.0; n],
            counts: vec![0; n],
            excluded: 0,
        }
    }

    /// Add one observation.
    #[inline]
    pub fn add(&mut self, time: f64, value: f64) {
        match self.window.batch_index(time) {
            Some(k) => {
                self.totals[k] += value;
                self.counts[k] += 1;
            }
            None => self.excluded += 1,
        }
    }

    /// Fold another accumulator over the same window into this one.
    pub fn merge(&mut self, other: &BatchAccumulator) {
        debug_assert_eq!(self.totals.len(), other.totals.len());
        for (a, b) in self.totals.iter_mut().zip(&other.totals) {
            *a += b;
        }
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
        self.excluded += other.excluded;
    }

    /// Observations that fell outside every included batch.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Convert totals into means, failing on the first empty batch.
    pub fn finalize(self) -> Result<BatchMeans> {
        if let Some(index) = self.counts.iter().position(|&c| c == 0) {
            let (window_start, window_end) = self.window.bounds(index);
            return Err(AnalysisError::EmptyBatch {
                index,
                window_start,
                window_end,
            });
        }

        let means = self
            .totals
            .iter()
            .zip(&self.counts)
            .map(|(&total, &count)| total / count as f64)
            .collect();

        Ok(BatchMeans {
            means,
            counts: self.counts,
        })
    }
}

/// Partition `series` into batches of width `batch_time` over
/// `[start_time, end_time)` and return the per-batch means and counts.
///
/// # Arguments
///
/// * `series` - Paired `(time, value)` observations
/// * `batch_time` - Batch width, strictly positive
/// * `start_time` - Inclusive start of the first batch
/// * `end_time` - Upper bound; trailing partial batches are dropped
///
/// # Returns
///
/// [`BatchMeans::empty`] if the window holds no full batch (including
/// `end_time <= start_time`).
///
/// # Errors
///
/// - [`AnalysisError::InvalidParameter`] for a non-positive `batch_time` or
///   non-finite bounds
/// - [`AnalysisError::EmptyBatch`] if any included batch has no observations
pub fn batch_means(
    series: &MeasurementSeries,
    batch_time: f64,
    start_time: f64,
    end_time: f64,
) -> Result<BatchMeans> {
    let window = BatchWindow::new(batch_time, start_time, end_time)?;
    batch_means_in(series, &window)
}

/// [`batch_means`] over a prebuilt window.
pub fn batch_means_in(series: &MeasurementSeries, window: &BatchWindow) -> Result<BatchMeans> {
    let num_batches = window.num_batches();
    tracing::debug!(
        num_batches,
        batch_time = window.batch_time,
        start_time = window.start_time,
        end_time = window.end_time,
        observations = series.len(),
        "partitioning series into batches"
    );

    if num_batches == 0 {
        return Ok(BatchMeans::empty());
    }

    // More batches than observations guarantees an empty batch. Report it
    // without allocating per-batch buffers.
    if num_batches > series.len() {
        return Err(first_empty_batch(series, window));
    }

    let accumulator = accumulate(series, window);
    if accumulator.excluded() > 0 {
        tracing::trace!(
            excluded = accumulator.excluded(),
            "observations outside the batch window were dropped"
        );
    }

    accumulator.finalize()
}

/// Locate the lowest-indexed empty batch from the occupied indices alone.
fn first_empty_batch(series: &MeasurementSeries, window: &BatchWindow) -> AnalysisError {
    let mut occupied: Vec<usize> = series
        .times()
        .iter()
        .filter_map(|&t| window.batch_index(t))
        .collect();
    occupied.sort_unstable();
    occupied.dedup();

    let index = occupied
        .iter()
        .enumerate()
        .find(|&(expected, &k)| expected != k)
        .map_or(occupied.len(), |(expected, _)| expected);

    tracing::debug!(
        num_batches = window.num_batches(),
        observations = series.len(),
        first_empty = index,
        "more batches than observations"
    );

    let (window_start, window_end) = window.bounds(index);
    AnalysisError::EmptyBatch {
        index,
        window_start,
        window_end,
    }
}

#[cfg(not(feature = "parallel"))]
fn accumulate(series: &MeasurementSeries, window: &BatchWindow) -> BatchAccumulator {
    let mut accumulator = BatchAccumulator::new(*window);
    for (time, value) in series.iter() {
        accumulator.add(time, value);
    }
    accumulator
}

#[cfg(feature = "parallel")]
fn accumulate(series: &MeasurementSeries, window: &BatchWindow) -> BatchAccumulator {
    let window = *window;
    series
        .times()
        .par_iter()
        .zip(series.values().par_iter())
        .fold(
            || BatchAccumulator::new(window),
            |mut acc, (&time, &value)| {
                acc.add(time, value);
                acc
            },
        )
        .reduce(
            || BatchAccumulator::new(window),
            |mut a, b| {
                a.merge(&b);
                a
            },
        )
}
