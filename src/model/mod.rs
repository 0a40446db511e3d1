//! Read-only record of a finished dispatch simulation run.
//!
//! The simulation engine that produces these records lives elsewhere; this
//! crate only consumes them. All times are in simulation clock units (day
//! fractions unless stated otherwise).

mod time;

pub use time::SimTime;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// A single emergency call recorded by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// When the call arrived.
    pub arrival_time: f64,

    /// Time from arrival until an ambulance reached the scene.
    ///
    /// [`SimTime::NULL`] when the call was never answered (cancelled, or the
    /// run ended first).
    #[serde(default = "SimTime::null")]
    pub response_time: SimTime,

    /// Index into the per-priority target response-time table.
    pub priority: usize,
}

impl Call {
    /// Create an answered call.
    pub fn answered(arrival_time: f64, response_time: f64, priority: usize) -> Self {
        Self {
            arrival_time,
            response_time: SimTime::new(response_time),
            priority,
        }
    }

    /// Create a call that never received a response.
    pub fn unanswered(arrival_time: f64, priority: usize) -> Self {
        Self {
            arrival_time,
            response_time: SimTime::NULL,
            priority,
        }
    }

    /// Whether the call received a response.
    pub fn is_answered(&self) -> bool {
        !self.response_time.is_null()
    }
}

/// Aggregate record for one ambulance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ambulance {
    /// Total time spent travelling over the run.
    pub total_travel_time: f64,
}

/// A recorded simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Whether the run finished. Analysis refuses in-progress runs.
    pub complete: bool,

    /// Clock time at which the run started.
    pub start_time: f64,

    /// Clock time at which the run ended.
    pub end_time: f64,

    /// Calls in arrival order.
    pub calls: Vec<Call>,

    /// Ambulance fleet.
    #[serde(default)]
    pub ambulances: Vec<Ambulance>,

    /// Target response time per priority level.
    #[serde(default)]
    pub target_response_times: Vec<f64>,
}

impl Simulation {
    /// Number of calls recorded.
    pub fn num_calls(&self) -> usize {
        self.calls.len()
    }

    /// Fail with [`AnalysisError::IncompleteSimulation`] unless the run finished.
    pub fn require_complete(&self) -> Result<()> {
        if self.complete {
            Ok(())
        } else {
            Err(AnalysisError::IncompleteSimulation)
        }
    }

    /// Iterate over calls that received a response.
    pub fn answered_calls(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter().filter(|c| c.is_answered())
    }

    /// Number of calls with no response.
    pub fn num_unanswered(&self) -> usize {
        self.calls.iter().filter(|c| !c.is_answered()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_complete() {
        let mut sim = Simulation {
            complete: false,
            start_time: 0.0,
            end_time: 1.0,
            calls: vec![],
            ambulances: vec![],
            target_response_times: vec![],
        };
        assert!(matches!(
            sim.require_complete(),
            Err(AnalysisError::IncompleteSimulation)
        ));
        sim.complete = true;
        assert!(sim.require_complete().is_ok());
    }

    #[test]
    fn test_answered_filtering() {
        let sim = Simulation {
            complete: true,
            start_time: 0.0,
            end_time: 1.0,
            calls: vec![
                Call::answered(0.1, 0.01, 0),
                Call::unanswered(0.2, 1),
                Call::answered(0.3, 0.02, 0),
            ],
            ambulances: vec![],
            target_response_times: vec![],
        };
        assert_eq!(sim.num_calls(), 3);
        assert_eq!(sim.answered_calls().count(), 2);
        assert_eq!(sim.num_unanswered(), 1);
    }

    #[test]
    fn test_unanswered_call_deserializes_from_null() {
        let call: Call =
            serde_json::from_str(r#"{"arrival_time":0.5,"response_time":null,"priority":1}"#)
                .unwrap();
        assert!(!call.is_answered());

        let missing: Call = serde_json::from_str(r#"{"arrival_time":0.5,"priority":1}"#).unwrap();
        assert!(!missing.is_answered());
    }
}
