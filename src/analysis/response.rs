//! Response-time reporting over answered calls.

use serde::{Deserialize, Serialize};

use crate::data::TimeUnit;
use crate::error::{AnalysisError, Result};
use crate::model::{SimTime, Simulation};
use crate::statistics::{quantiles, Summary};

/// Distribution of response times for answered calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeSummary {
    /// Statistics over answered calls, in the requested unit.
    pub answered: Summary,
    /// Calls that never received a response.
    pub unanswered: usize,
    /// Unit of the summary values.
    pub unit: TimeUnit,
}

/// Response time of every call in call order, unanswered ones as
/// [`SimTime::NULL`].
pub fn response_times(sim: &Simulation) -> Result<Vec<SimTime>> {
    sim.require_complete()?;
    Ok(sim.calls.iter().map(|c| c.response_time).collect())
}

/// Response times of answered calls converted to `unit`.
pub fn answered_response_times(sim: &Simulation, unit: TimeUnit) -> Result<Vec<f64>> {
    sim.require_complete()?;
    Ok(sim
        .calls
        .iter()
        .filter_map(|c| c.response_time.get())
        .map(|r| unit.from_days(r))
        .collect())
}

/// Mean response time of answered calls, in `unit`.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] if no call was answered.
pub fn average_response_time(sim: &Simulation, unit: TimeUnit) -> Result<f64> {
    Ok(response_time_summary(sim, unit)?.answered.mean)
}

/// Mean, spread and range of answered response times plus the unanswered
/// count.
pub fn response_time_summary(sim: &Simulation, unit: TimeUnit) -> Result<ResponseTimeSummary> {
    let times = answered_response_times(sim, unit)?;
    let answered = Summary::from_slice(&times).map_err(|_| AnalysisError::InsufficientData {
        what: "response-time summary",
        got: 0,
        min: 1,
    })?;

    Ok(ResponseTimeSummary {
        answered,
        unanswered: sim.num_calls() - answered.count,
        unit,
    })
}

/// Type 2 percentiles of answered response times, in `unit`.
pub fn response_time_percentiles(
    sim: &Simulation,
    probabilities: &[f64],
    unit: TimeUnit,
) -> Result<Vec<f64>> {
    let times = answered_response_times(sim, unit)?;
    quantiles(&times, probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Call;

    fn sim() -> Simulation {
        Simulation {
            complete: true,
            start_time: 0.0,
            end_time: 1.0,
            calls: vec![
                Call::answered(0.1, 10.0 / 1440.0, 0),
                Call::unanswered(0.2, 1),
                Call::answered(0.3, 20.0 / 1440.0, 0),
                Call::answered(0.4, 30.0 / 1440.0, 1),
            ],
            ambulances: vec![],
            target_response_times: vec![],
        }
    }

    #[test]
    fn test_response_times_keep_sentinel() {
        let times = response_times(&sim()).unwrap();
        assert_eq!(times.len(), 4);
        assert!(times[1].is_null());
    }

    #[test]
    fn test_average_in_minutes() {
        let avg = average_response_time(&sim(), TimeUnit::Minutes).unwrap();
        assert!((avg - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_excludes_unanswered() {
        let summary = response_time_summary(&sim(), TimeUnit::Minutes).unwrap();
        assert_eq!(summary.answered.count, 3);
        assert_eq!(summary.unanswered, 1);
        assert!((summary.answered.min - 10.0).abs() < 1e-9);
        assert!((summary.answered.max - 30.0).abs() < 1e-9);
        assert!((summary.answered.std_dev - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentiles() {
        let p = response_time_percentiles(&sim(), &[0.5], TimeUnit::Minutes).unwrap();
        assert!((p[0] - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_answered_calls() {
        let mut s = sim();
        s.calls = vec![Call::unanswered(0.1, 0)];
        assert!(matches!(
            average_response_time(&s, TimeUnit::Days),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_requires_complete() {
        let mut s = sim();
        s.complete = false;
        assert!(response_times(&s).is_err());
        assert!(response_time_summary(&s, TimeUnit::Days).is_err());
    }
}
