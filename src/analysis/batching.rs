//! Batch means of call response times over the steady-state window.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::model::Simulation;
use crate::statistics::{batch_means_in, BatchMeans};
use crate::types::{BatchWindow, MeasurementSeries};

/// Response-time batches together with the bookkeeping behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeBatches {
    /// Window after removing warm-up and cool-down.
    pub window: BatchWindow,
    /// Per-batch mean response time and call count.
    pub batches: BatchMeans,
    /// Calls dropped because they were never answered.
    pub unanswered: usize,
    /// Answered calls whose arrival fell outside every batch.
    pub excluded: usize,
}

/// Batch the response times of answered calls by arrival time.
///
/// Batches cover `[sim.start_time + warm_up_time, sim.end_time - cool_down_time)`.
/// Calls without a response are filtered out before batching; their count is
/// returned in [`ResponseTimeBatches::unanswered`].
///
/// # Errors
///
/// - [`AnalysisError::IncompleteSimulation`] if the run has not finished
/// - [`AnalysisError::InvalidParameter`] for negative warm-up/cool-down or a
///   non-positive batch time
/// - [`AnalysisError::EmptyBatch`] if some batch received no answered call,
///   including the case where no call was answered at all
/// - [`AnalysisError::NegativeValue`] for a negative arrival or response time
pub fn response_time_batches(
    sim: &Simulation,
    batch_time: f64,
    warm_up_time: f64,
    cool_down_time: f64,
) -> Result<ResponseTimeBatches> {
    sim.require_complete()?;
    check_trim("warm_up_time", warm_up_time)?;
    check_trim("cool_down_time", cool_down_time)?;

    let window = BatchWindow::new(
        batch_time,
        sim.start_time + warm_up_time,
        sim.end_time - cool_down_time,
    )?;

    let (times, values): (Vec<f64>, Vec<f64>) = sim
        .calls
        .iter()
        .filter_map(|call| call.response_time.get().map(|r| (call.arrival_time, r)))
        .unzip();

    let unanswered = sim.num_calls() - times.len();
    if unanswered > 0 {
        tracing::debug!(unanswered, "skipping unanswered calls in response-time batches");
    }
    if times.is_empty() {
        if window.num_batches() == 0 {
            return Ok(ResponseTimeBatches {
                window,
                batches: BatchMeans::empty(),
                unanswered,
                excluded: 0,
            });
        }
        let (window_start, window_end) = window.bounds(0);
        return Err(AnalysisError::EmptyBatch {
            index: 0,
            window_start,
            window_end,
        });
    }

    let answered = times.len();
    let series = MeasurementSeries::new(times, values)?;
    let batches = batch_means_in(&series, &window)?;
    let excluded = answered - batches.total_count();

    Ok(ResponseTimeBatches {
        window,
        batches,
        unanswered,
        excluded,
    })
}

fn check_trim(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid(
            name,
            format!("must be finite and >= 0, got {}", value),
        ))
    }
}
