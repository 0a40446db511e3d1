//! Mean with a two-sided Student-t confidence interval.
//!
//! The error bound is `t_{(1 + conf) / 2, n - 1} * s / sqrt(n)`, where `s` is
//! the sample standard deviation of the `n` replicates. Two entry points:
//! [`mean_with_ci`] for a single series and [`mean_with_ci_table`] for a
//! positions-by-replicates matrix, one estimate per row.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::constants::MIN_REPLICATES_FOR_CI;
use crate::error::{AnalysisError, Result};
use crate::statistics::Summary;

/// Point estimate with a symmetric error bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanWithError {
    /// Sample mean.
    pub mean: f64,
    /// Half-width of the confidence interval.
    pub error: f64,
    /// Confidence level the interval was built for.
    pub confidence: f64,
    /// Number of replicates behind the estimate.
    pub replicates: usize,
}

impl MeanWithError {
    /// Lower end of the interval.
    pub fn lower(&self) -> f64 {
        self.mean - self.error
    }

    /// Upper end of the interval.
    pub fn upper(&self) -> f64 {
        self.mean + self.error
    }

    /// Whether `value` falls inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        (self.lower()..=self.upper()).contains(&value)
    }

    /// Rescale mean and error, e.g. for a unit conversion.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            mean: self.mean * factor,
            error: self.error * factor.abs(),
            ..*self
        }
    }
}

/// Quantile `p` of the Student-t distribution with `dof` degrees of freedom.
///
/// # Errors
///
/// [`AnalysisError::InvalidParameter`] if `p` is outside (0, 1) or `dof` is 0.
pub fn t_quantile(p: f64, dof: usize) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(AnalysisError::invalid(
            "p",
            format!("quantile probability must be in (0, 1), got {}", p),
        ));
    }
    let dist = StudentsT::new(0.0, 1.0, dof as f64)
        .map_err(|e| AnalysisError::invalid("dof", e.to_string()))?;
    Ok(dist.inverse_cdf(p))
}

/// Mean and confidence interval of one series of replicates.
///
/// # Errors
///
/// - [`AnalysisError::InvalidParameter`] if `conf` is outside (0, 1)
/// - [`AnalysisError::InsufficientData`] for fewer than two replicates
pub fn mean_with_ci(samples: &[f64], conf: f64) -> Result<MeanWithError> {
    check_confidence(conf)?;
    if samples.len() < MIN_REPLICATES_FOR_CI {
        return Err(AnalysisError::InsufficientData {
            what: "confidence interval",
            got: samples.len(),
            min: MIN_REPLICATES_FOR_CI,
        });
    }

    let summary = Summary::from_slice(samples)?;
    let n = summary.count;
    let t = t_quantile((1.0 + conf) / 2.0, n - 1)?;
    let std_err = summary.std_dev / (n as f64).sqrt();

    Ok(MeanWithError {
        mean: summary.mean,
        error: t * std_err,
        confidence: conf,
        replicates: n,
    })
}

/// Per-row mean and confidence interval of a replicate table.
///
/// Rows are independent positions (e.g. scenarios), columns are replicate
/// observations at that position. All rows share `ncols - 1` degrees of
/// freedom.
pub fn mean_with_ci_table(table: &DMatrix<f64>, conf: f64) -> Result<Vec<MeanWithError>> {
    check_confidence(conf)?;
    if table.ncols() < MIN_REPLICATES_FOR_CI {
        return Err(AnalysisError::InsufficientData {
            what: "confidence interval",
            got: table.ncols(),
            min: MIN_REPLICATES_FOR_CI,
        });
    }

    let mut row_buf = Vec::with_capacity(table.ncols());
    table
        .row_iter()
        .map(|row| {
            row_buf.clear();
            row_buf.extend(row.iter().copied());
            mean_with_ci(&row_buf, conf)
        })
        .collect()
}

fn check_confidence(conf: f64) -> Result<()> {
    if conf > 0.0 && conf < 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::invalid(
            "conf",
            format!("confidence level must be in (0, 1), got {}", conf),
        ))
    }
}
