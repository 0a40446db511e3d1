//! Configuration for simulation run analysis.

use crate::constants::{
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_INDEPENDENCE_ALPHA, DEFAULT_PERCENTILES, HOURS_PER_DAY,
};
use crate::data::TimeUnit;
use crate::error::{AnalysisError, Result};

/// Configuration options for [`DispatchAnalyzer`](crate::DispatchAnalyzer).
///
/// All times are in simulation clock units (days).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    // =========================================================================
    // Batch means
    // =========================================================================
    /// Width of each batch.
    ///
    /// Must be long enough that every batch holds at least one answered call
    /// and that consecutive batch means are roughly uncorrelated.
    /// Default: 1.0 (one day).
    pub batch_time: f64,

    /// Initial period excluded from batching to avoid start-up bias.
    ///
    /// Default: 0.0.
    pub warm_up_time: f64,

    /// Final period excluded from batching (calls still in progress when the
    /// run stopped). Default: 0.0.
    pub cool_down_time: f64,

    // =========================================================================
    // Inference
    // =========================================================================
    /// Confidence level for the steady-state interval. Default: 0.95.
    pub confidence_level: f64,

    /// Significance level of the batch independence check.
    ///
    /// A Durbin-Watson p-value below this flags the batches as correlated.
    /// Default: 0.05.
    pub independence_alpha: f64,

    // =========================================================================
    // Reporting
    // =========================================================================
    /// Unit for reported response and travel times. Default: days.
    pub time_unit: TimeUnit,

    /// Target response time per priority, in days.
    ///
    /// Default: None (use the simulation's own table).
    pub target_response_times: Option<Vec<f64>>,

    /// Response-time percentiles to report. Default: median and 90th.
    pub percentiles: Vec<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            batch_time: 1.0,
            warm_up_time: 0.0,
            cool_down_time: 0.0,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            independence_alpha: DEFAULT_INDEPENDENCE_ALPHA,
            time_unit: TimeUnit::Days,
            target_response_times: None,
            percentiles: DEFAULT_PERCENTILES.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Create a configuration with the given batch time and defaults otherwise.
    pub fn new(batch_time: f64) -> Self {
        Self::default().batch_time(batch_time)
    }

    /// Daily batches, reported in minutes.
    pub fn daily() -> Self {
        Self {
            batch_time: 1.0,
            time_unit: TimeUnit::Minutes,
            ..Default::default()
        }
    }

    /// Hourly batches with a one-hour warm-up, reported in minutes.
    ///
    /// Suited to short runs with dense call traffic.
    pub fn hourly() -> Self {
        Self {
            batch_time: 1.0 / HOURS_PER_DAY,
            warm_up_time: 1.0 / HOURS_PER_DAY,
            time_unit: TimeUnit::Minutes,
            ..Default::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the batch time.
    pub fn batch_time(mut self, batch_time: f64) -> Self {
        assert!(
            batch_time.is_finite() && batch_time > 0.0,
            "batch_time must be positive"
        );
        self.batch_time = batch_time;
        self
    }

    /// Set the warm-up period.
    pub fn warm_up(mut self, time: f64) -> Self {
        assert!(time.is_finite() && time >= 0.0, "warm_up_time must be non-negative");
        self.warm_up_time = time;
        self
    }

    /// Set the cool-down period.
    pub fn cool_down(mut self, time: f64) -> Self {
        assert!(time.is_finite() && time >= 0.0, "cool_down_time must be non-negative");
        self.cool_down_time = time;
        self
    }

    /// Set the confidence level.
    pub fn confidence_level(mut self, conf: f64) -> Self {
        assert!(conf > 0.0 && conf < 1.0, "confidence_level must be in (0, 1)");
        self.confidence_level = conf;
        self
    }

    /// Set the independence check significance level.
    pub fn independence_alpha(mut self, alpha: f64) -> Self {
        assert!(alpha > 0.0 && alpha < 1.0, "independence_alpha must be in (0, 1)");
        self.independence_alpha = alpha;
        self
    }

    /// Set the reporting time unit.
    pub fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = unit;
        self
    }

    /// Override the simulation's target response times.
    pub fn target_response_times(mut self, targets: Vec<f64>) -> Self {
        self.target_response_times = Some(targets);
        self
    }

    /// Set the reported percentiles.
    pub fn percentiles(mut self, percentiles: Vec<f64>) -> Self {
        assert!(
            percentiles.iter().all(|p| (0.0..=1.0).contains(p)),
            "percentiles must be in [0, 1]"
        );
        self.percentiles = percentiles;
        self
    }

    /// Check if the configuration is valid.
    ///
    /// Fields can be set directly, bypassing the builder assertions; the
    /// analyzer calls this before running.
    pub fn validate(&self) -> Result<()> {
        if !(self.batch_time.is_finite() && self.batch_time > 0.0) {
            return Err(AnalysisError::invalid("batch_time", "must be positive"));
        }
        if !(self.warm_up_time.is_finite() && self.warm_up_time >= 0.0) {
            return Err(AnalysisError::invalid("warm_up_time", "must be non-negative"));
        }
        if !(self.cool_down_time.is_finite() && self.cool_down_time >= 0.0) {
            return Err(AnalysisError::invalid("cool_down_time", "must be non-negative"));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(AnalysisError::invalid("confidence_level", "must be in (0, 1)"));
        }
        if !(self.independence_alpha > 0.0 && self.independence_alpha < 1.0) {
            return Err(AnalysisError::invalid("independence_alpha", "must be in (0, 1)"));
        }
        if !self.percentiles.iter().all(|p| (0.0..=1.0).contains(p)) {
            return Err(AnalysisError::invalid("percentiles", "must be in [0, 1]"));
        }
        if let Some(targets) = &self.target_response_times {
            if targets.iter().any(|t| !t.is_finite() || *t < 0.0) {
                return Err(AnalysisError::invalid(
                    "target_response_times",
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.batch_time, 1.0);
        assert_eq!(config.warm_up_time, 0.0);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.independence_alpha, 0.05);
        assert_eq!(config.time_unit, TimeUnit::Days);
        assert!(config.target_response_times.is_none());
    }

    #[test]
    fn test_preset_configs() {
        let hourly = AnalysisConfig::hourly();
        assert!((hourly.batch_time - 1.0 / 24.0).abs() < 1e-15);
        assert_eq!(hourly.time_unit, TimeUnit::Minutes);

        let daily = AnalysisConfig::daily();
        assert_eq!(daily.batch_time, 1.0);
    }

    #[test]
    fn test_builder_methods() {
        let config = AnalysisConfig::new(0.5)
            .warm_up(1.0)
            .cool_down(0.25)
            .confidence_level(0.9)
            .time_unit(TimeUnit::Minutes)
            .target_response_times(vec![0.01, 0.02]);

        assert_eq!(config.batch_time, 0.5);
        assert_eq!(config.warm_up_time, 1.0);
        assert_eq!(config.cool_down_time, 0.25);
        assert_eq!(config.confidence_level, 0.9);
        assert_eq!(config.target_response_times, Some(vec![0.01, 0.02]));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(AnalysisConfig::default().validate().is_ok());

        let mut invalid = AnalysisConfig::default();
        invalid.batch_time = 0.0;
        assert!(invalid.validate().is_err());

        let mut invalid = AnalysisConfig::default();
        invalid.confidence_level = 1.0;
        assert!(invalid.validate().is_err());

        let mut invalid = AnalysisConfig::default();
        invalid.target_response_times = Some(vec![-1.0]);
        assert!(invalid.validate().is_err());
    }

    #[test]
    #[should_panic]
    fn test_invalid_batch_time() {
        AnalysisConfig::new(-1.0);
    }

    #[test]
    #[should_panic]
    fn test_invalid_confidence() {
        AnalysisConfig::default().confidence_level(1.5);
    }
}
