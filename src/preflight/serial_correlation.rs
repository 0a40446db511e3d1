//! Serial-correlation check for batch means.
//!
//! Batch means are only usable as independent samples once the batch width
//! is long compared to the correlation time of the underlying process. This
//! check fits the trivial constant-mean model, takes residuals
//! `e_t = x_t - mean(x)` and computes the Durbin-Watson statistic
//!
//! ```text
//! d = Σ (e_t - e_{t-1})² / Σ e_t²
//! ```
//!
//! For an intercept-only regression the null distribution of `d` has
//! `E[d] = 2` and `Var[d] = 4(n - 2) / (n² - 1)`; the p-value is the two-sided
//! normal tail of the standardized statistic. A small p-value means the
//! batch means are still autocorrelated and the batch time should grow.

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc;

use crate::constants::MIN_BATCHES_FOR_DIAGNOSTIC;
use crate::error::{AnalysisError, Result};

/// Residual sum of squares below which a sequence is treated as constant.
const CONSTANT_RSS: f64 = 1e-24;

/// Outcome of the Durbin-Watson test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurbinWatson {
    /// The statistic `d`, in [0, 4]. Near 2 means no lag-1 correlation.
    pub statistic: f64,
    /// Two-sided p-value against the no-autocorrelation null, in [0, 1].
    pub p_value: f64,
    /// Number of batch means tested.
    pub n: usize,
}

impl DurbinWatson {
    /// Lag-1 autocorrelation implied by the statistic, `1 - d / 2`.
    pub fn lag1_autocorrelation(&self) -> f64 {
        1.0 - self.statistic / 2.0
    }

    /// Whether the null of independence is rejected at level `alpha`.
    pub fn rejects_independence(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Run the Durbin-Watson test on a batch-mean sequence.
///
/// # Errors
///
/// [`AnalysisError::InsufficientBatches`] if fewer than two means are given.
/// [`AnalysisError::NonFiniteValue`] if a mean is NaN or infinite.
pub fn durbin_watson_test(batch_means: &[f64]) -> Result<DurbinWatson> {
    let n = batch_means.len();
    if n < MIN_BATCHES_FOR_DIAGNOSTIC {
        return Err(AnalysisError::InsufficientBatches { got: n });
    }
    if let Some(index) = batch_means.iter().position(|x| !x.is_finite()) {
        return Err(AnalysisError::NonFiniteValue { index });
    }

    let mean = batch_means.iter().sum::<f64>() / n as f64;
    let residuals: Vec<f64> = batch_means.iter().map(|x| x - mean).collect();

    let rss: f64 = residuals.iter().map(|e| e * e).sum();
    let null_variance = 4.0 * (n as f64 - 2.0) / ((n * n) as f64 - 1.0);

    // A constant sequence carries no evidence of correlation, and with two
    // points the residuals are mirror images so d == 2 identically.
    if rss < CONSTANT_RSS || null_variance <= 0.0 {
        return Ok(DurbinWatson {
            statistic: 2.0,
            p_value: 1.0,
            n,
        });
    }

    let diff_ss: f64 = residuals.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let statistic = diff_ss / rss;

    let z = (statistic - 2.0) / null_variance.sqrt();
    let p_value = erfc(z.abs() / std::f64::consts::SQRT_2).clamp(0.0, 1.0);

    Ok(DurbinWatson {
        statistic,
        p_value,
        n,
    })
}

/// Warning from the batch independence check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SerialCorrelationWarning {
    /// Batch means still show lag-1 autocorrelation.
    ResidualAutocorrelation {
        /// Durbin-Watson statistic.
        statistic: f64,
        /// Two-sided p-value.
        p_value: f64,
        /// Significance level that was applied.
        alpha: f64,
    },
}

impl SerialCorrelationWarning {
    /// Check if this warning indicates a critical issue.
    ///
    /// Correlated batches understate the confidence interval width; the
    /// estimate is still reported.
    pub fn is_critical(&self) -> bool {
        false
    }

    /// Get a human-readable description of the warning.
    pub fn description(&self) -> String {
        match self {
            SerialCorrelationWarning::ResidualAutocorrelation {
                statistic,
                p_value,
                alpha,
            } => format!(
                "Batch means are serially correlated: Durbin-Watson d={:.3}, p={:.4} \
                 (alpha: {:.3}). Increase the batch time before treating batches \
                 as independent samples.",
                statistic, p_value, alpha
            ),
        }
    }
}

/// Test batch means for independence at significance level `alpha`.
///
/// # Returns
///
/// The test result, plus `Some(warning)` when independence is rejected.
pub fn check_batch_independence(
    batch_means: &[f64],
    alpha: f64,
) -> Result<(DurbinWatson, Option<SerialCorrelationWarning>)> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(AnalysisError::invalid(
            "alpha",
            format!("significance level must be in (0, 1), got {}", alpha),
        ));
    }

    let dw = durbin_watson_test(batch_means)?;
    let warning = dw.rejects_independence(alpha).then(|| {
        tracing::warn!(
            statistic = dw.statistic,
            p_value = dw.p_value,
            alpha,
            "batch means show residual autocorrelation"
        );
        SerialCorrelationWarning::ResidualAutocorrelation {
            statistic: dw.statistic,
            p_value: dw.p_value,
            alpha,
        }
    });

    Ok((dw, warning))
}

/// Sample autocorrelation at `lag`.
///
/// `ACF(k) = Cov(X_t, X_{t+k}) / Var(X)`. Returns 0 for a constant series or
/// when `lag >= data.len()`.
pub fn autocorrelation(data: &[f64], lag: usize) -> f64 {
    let n = data.len();
    if n <= lag {
        return 0.0;
    }

    let mean: f64 = data.iter().sum::<f64>() / n as f64;
    let variance: f64 = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

    if variance < 1e-12 {
        return 0.0;
    }

    let autocovariance: f64 = data
        .iter()
        .take(n - lag)
        .zip(data.iter().skip(lag))
        .map(|(x_t, x_t_k)| (x_t - mean) * (x_t_k - mean))
        .sum::<f64>()
        / (n - lag) as f64;

    autocovariance / variance
}

/// Autocorrelation from lag 0 through `max_lag`.
pub fn autocorrelation_function(data: &[f64], max_lag: usize) -> Vec<f64> {
    (0..=max_lag).map(|lag| autocorrelation(data, lag)).collect()
}
