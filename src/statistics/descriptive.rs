//! Descriptive statistics (count, mean, standard deviation, extremes).

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Mean, sample standard deviation and range of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single value.
    pub std_dev: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Summary {
    /// Summarize `values`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InsufficientData`] if `values` is empty.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::from_iter_values(values.iter().copied())
    }

    /// Summarize an iterator of values in a single pass.
    pub fn from_iter_values(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        let mut acc = Welford::new();
        for v in values {
            acc.update(v);
        }
        acc.finalize().ok_or(AnalysisError::InsufficientData {
            what: "summary statistics",
            got: 0,
            min: 1,
        })
    }

    /// Sample variance.
    pub fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }
}

/// Welford's online mean/variance accumulator with min/max tracking.
#[derive(Debug, Clone, Copy)]
struct Welford {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Welford {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    #[inline]
    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    fn finalize(self) -> Option<Summary> {
        if self.count == 0 {
            return None;
        }
        let variance = if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        };
        Some(Summary {
            count: self.count,
            mean: self.mean,
            std_dev: variance.sqrt(),
            min: self.min,
            max: self.max,
        })
    }
}
