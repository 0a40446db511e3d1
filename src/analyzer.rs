//! Main `DispatchAnalyzer` entry point and builder.

use crate::analysis::{
    calls_meeting_target, has_enough_batches, response_time_batches, response_time_percentiles,
    response_time_summary, service_level_by_priority, steady_state_estimate, travel_time_summary,
};
use crate::config::AnalysisConfig;
use crate::data::TimeUnit;
use crate::error::Result;
use crate::model::Simulation;
use crate::report::{AnalysisReport, Percentile};

/// Main entry point for analyzing a finished simulation run.
///
/// # Example
///
/// ```ignore
/// use dispatch_analysis::{DispatchAnalyzer, TimeUnit};
///
/// let report = DispatchAnalyzer::with_batch_time(0.5)
///     .warm_up(1.0)
///     .cool_down(0.5)
///     .time_unit(TimeUnit::Minutes)
///     .analyze(&sim)?;
///
/// if let Some(ss) = &report.steady_state {
///     println!("mean response {:.1} ± {:.1} min", ss.estimate.mean, ss.estimate.error);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchAnalyzer {
    config: AnalysisConfig,
}

impl DispatchAnalyzer {
    /// Create with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration and the given batch time.
    pub fn with_batch_time(batch_time: f64) -> Self {
        Self::new(AnalysisConfig::new(batch_time))
    }

    /// Set the warm-up period.
    pub fn warm_up(mut self, time: f64) -> Self {
        self.config = self.config.warm_up(time);
        self
    }

    /// Set the cool-down period.
    pub fn cool_down(mut self, time: f64) -> Self {
        self.config = self.config.cool_down(time);
        self
    }

    /// Set the confidence level of the steady-state interval.
    pub fn confidence_level(mut self, conf: f64) -> Self {
        self.config = self.config.confidence_level(conf);
        self
    }

    /// Set the reporting time unit.
    pub fn time_unit(mut self, unit: TimeUnit) -> Self {
        self.config = self.config.time_unit(unit);
        self
    }

    /// Override the simulation's target response times.
    pub fn target_response_times(mut self, targets: Vec<f64>) -> Self {
        self.config = self.config.target_response_times(targets);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every analysis on `sim`.
    ///
    /// Steps that cannot run on this data (no target table, no ambulances,
    /// fewer than two batches) are skipped with a note in
    /// [`AnalysisReport::notes`]; everything else propagates its error.
    pub fn analyze(&self, sim: &Simulation) -> Result<AnalysisReport> {
        self.config.validate()?;
        sim.require_complete()?;

        let config = &self.config;
        let unit = config.time_unit;
        let mut notes = Vec::new();

        let response = response_time_summary(sim, unit)?;
        if response.unanswered > 0 {
            tracing::warn!(
                unanswered = response.unanswered,
                "calls without a response are excluded from response-time statistics"
            );
            notes.push(format!(
                "{} of {} calls were never answered and are excluded from response times",
                response.unanswered,
                sim.num_calls()
            ));
        }

        let percentiles = response_time_percentiles(sim, &config.percentiles, unit)?
            .into_iter()
            .zip(&config.percentiles)
            .map(|(value, &p)| Percentile { p, value })
            .collect();

        let targets = config.target_response_times.as_deref();
        let has_targets = targets.map_or(!sim.target_response_times.is_empty(), |t| !t.is_empty());
        let (service_level, service_level_by_priority) = if has_targets {
            (
                Some(calls_meeting_target(sim, targets)?),
                service_level_by_priority(sim, targets)?,
            )
        } else {
            notes.push("no target response times; service level skipped".to_string());
            (None, Vec::new())
        };

        let travel_time = if sim.ambulances.is_empty() {
            notes.push("no ambulances recorded; travel-time summary skipped".to_string());
            None
        } else {
            Some(travel_time_summary(sim, unit)?)
        };

        let batches = response_time_batches(
            sim,
            config.batch_time,
            config.warm_up_time,
            config.cool_down_time,
        )?;

        let steady_state = if has_enough_batches(&batches.batches) {
            let mut estimate = steady_state_estimate(
                &batches.batches,
                config.confidence_level,
                config.independence_alpha,
            )?;
            estimate.estimate = estimate.estimate.scaled(unit.per_day());
            if let Some(warning) = &estimate.warning {
                notes.push(warning.description());
            }
            Some(estimate)
        } else {
            notes.push(format!(
                "only {} batch(es) of width {} fit the analysis window; \
                 steady-state estimate skipped",
                batches.batches.len(),
                config.batch_time
            ));
            None
        };

        Ok(AnalysisReport {
            time_unit: unit,
            num_calls: sim.num_calls(),
            response,
            percentiles,
            service_level,
            service_level_by_priority,
            travel_time,
            batches,
            steady_state,
            notes,
        })
    }
}
