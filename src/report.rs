//! Result types produced by [`DispatchAnalyzer`](crate::DispatchAnalyzer).

use serde::{Deserialize, Serialize};

use crate::analysis::{ResponseTimeBatches, ResponseTimeSummary, ServiceLevel, SteadyStateEstimate};
use crate::data::TimeUnit;
use crate::statistics::Summary;

/// A response-time percentile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentile {
    /// Probability in [0, 1].
    pub p: f64,
    /// Response time at that probability, in the report unit.
    pub value: f64,
}

/// Full analysis of one simulation run.
///
/// Response, travel and steady-state figures are in [`AnalysisReport::time_unit`];
/// the batch window and batch means stay in simulation clock units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unit of reported times.
    pub time_unit: TimeUnit,

    /// Number of calls in the run.
    pub num_calls: usize,

    /// Answered-call response-time statistics.
    pub response: ResponseTimeSummary,

    /// Requested response-time percentiles.
    pub percentiles: Vec<Percentile>,

    /// Overall compliance with target response times.
    ///
    /// `None` when no target table was configured or recorded.
    pub service_level: Option<ServiceLevel>,

    /// Compliance per priority level.
    pub service_level_by_priority: Vec<ServiceLevel>,

    /// Travel-time statistics; `None` for a run without ambulances.
    pub travel_time: Option<Summary>,

    /// Response-time batch means over the steady-state window.
    pub batches: ResponseTimeBatches,

    /// Batch-means estimate of the steady-state mean response time.
    ///
    /// `None` when the window produced fewer than two batches.
    pub steady_state: Option<SteadyStateEstimate>,

    /// Human-readable notes about skipped or questionable steps.
    pub notes: Vec<String>,
}

impl AnalysisReport {
    /// Whether the steady-state estimate exists and its batches passed the
    /// independence check.
    pub fn is_reliable(&self) -> bool {
        self.steady_state
            .as_ref()
            .is_some_and(SteadyStateEstimate::batches_independent)
    }
}
