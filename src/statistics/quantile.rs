//! Quantiles using Type 2 (inverse empirical CDF with averaging).
//!
//! For a sorted sample `x` of size `n` at probability `p`:
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//! with 1-based indices clamped to `[1, n]`.
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical packages."
//! The American Statistician 50(4):361–365.

use crate::error::{AnalysisError, Result};

/// Quantile `p` of already-sorted data.
///
/// `sorted` must be non-empty and ascending; `p` must lie in [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = n as f64 * p + 0.5;
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    (sorted[floor_idx] + sorted[ceil_idx]) / 2.0
}

/// Compute several quantiles of `data`, sorting a copy once.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientData`] if `data` is empty
/// - [`AnalysisError::InvalidParameter`] if any probability is outside [0, 1]
pub fn quantiles(data: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(AnalysisError::InsufficientData {
            what: "quantiles",
            got: 0,
            min: 1,
        });
    }
    if let Some(&p) = probabilities.iter().find(|p| !(0.0..=1.0).contains(*p)) {
        return Err(AnalysisError::invalid(
            "probabilities",
            format!("quantile probability must be in [0, 1], got {}", p),
        ));
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    Ok(probabilities
        .iter()
        .map(|&p| quantile_sorted(&sorted, p))
        .collect())
}
