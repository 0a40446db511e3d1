//! Steady-state mean estimation from batch means.
//!
//! Treats each batch mean as one replicate: the point estimate is their
//! average and the interval comes from the Student-t distribution with
//! `num_batches - 1` degrees of freedom. The Durbin-Watson check is run on the
//! same sequence so callers can tell whether the interval is trustworthy.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_BATCHES_FOR_DIAGNOSTIC;
use crate::error::Result;
use crate::preflight::{check_batch_independence, DurbinWatson, SerialCorrelationWarning};
use crate::statistics::{mean_with_ci, BatchMeans, MeanWithError};

/// Batch-means estimate of a steady-state mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateEstimate {
    /// Mean of batch means with its confidence interval.
    pub estimate: MeanWithError,
    /// Independence test of the batch means.
    pub independence: DurbinWatson,
    /// Set when the batch means are still autocorrelated.
    pub warning: Option<SerialCorrelationWarning>,
}

impl SteadyStateEstimate {
    /// Whether the batches passed the independence check.
    pub fn batches_independent(&self) -> bool {
        self.warning.is_none()
    }
}

/// Estimate the steady-state mean from `batches`.
///
/// # Arguments
///
/// * `batches` - Batch means, typically from response-time batching
/// * `confidence` - Confidence level in (0, 1)
/// * `alpha` - Significance level of the independence check
///
/// # Errors
///
/// [`AnalysisError::InsufficientBatches`](crate::AnalysisError::InsufficientBatches)
/// with fewer than two batches, or invalid `confidence`/`alpha`.
pub fn steady_state_estimate(
    batches: &BatchMeans,
    confidence: f64,
    alpha: f64,
) -> Result<SteadyStateEstimate> {
    let (independence, warning) = check_batch_independence(&batches.means, alpha)?;
    let estimate = mean_with_ci(&batches.means, confidence)?;

    tracing::debug!(
        mean = estimate.mean,
        error = estimate.error,
        durbin_watson = independence.statistic,
        p_value = independence.p_value,
        "steady-state estimate from batch means"
    );

    Ok(SteadyStateEstimate {
        estimate,
        independence,
        warning,
    })
}

/// Whether `batches` is long enough for [`steady_state_estimate`].
pub fn has_enough_batches(batches: &BatchMeans) -> bool {
    batches.len() >= MIN_BATCHES_FOR_DIAGNOSTIC
}
