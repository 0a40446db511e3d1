//! Compliance with priority-specific target response times.
//!
//! Targets come from an explicit table when one is given, otherwise from the
//! simulation's own `target_response_times`. An unanswered call never meets
//! its target.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::model::{Call, Simulation};

/// Counts of calls meeting their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceLevel {
    /// Calls answered within their target.
    pub met: usize,
    /// Calls answered at all.
    pub answered: usize,
    /// Calls never answered.
    pub unanswered: usize,
}

impl ServiceLevel {
    /// Total calls counted.
    pub fn total(&self) -> usize {
        self.answered + self.unanswered
    }

    /// Fraction of all calls that met their target; 0 when there are no calls.
    pub fn fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.met as f64 / n as f64,
        }
    }

    fn record(&mut self, answered: bool, met: bool) {
        if answered {
            self.answered += 1;
        } else {
            self.unanswered += 1;
        }
        if met {
            self.met += 1;
        }
    }
}

/// Whether `call` was answered within the target for its priority.
///
/// Returns `None` if the priority has no entry in `targets`.
pub fn call_meets_target(call: &Call, targets: &[f64]) -> Option<bool> {
    let target = *targets.get(call.priority)?;
    Some(call.response_time.get().is_some_and(|r| r <= target))
}

/// Overall service level against `targets`, or the simulation's own table
/// when `targets` is `None`.
pub fn calls_meeting_target(sim: &Simulation, targets: Option<&[f64]>) -> Result<ServiceLevel> {
    let mut level = ServiceLevel::default();
    for_each_judged_call(sim, targets, |call, met| {
        level.record(call.is_answered(), met);
    })?;
    Ok(level)
}

/// Service level per priority; entry `p` covers calls of priority `p`.
pub fn service_level_by_priority(
    sim: &Simulation,
    targets: Option<&[f64]>,
) -> Result<Vec<ServiceLevel>> {
    let table_len = resolve_targets(sim, targets).len();
    let mut levels = vec![ServiceLevel::default(); table_len];
    for_each_judged_call(sim, targets, |call, met| {
        levels[call.priority].record(call.is_answered(), met);
    })?;
    Ok(levels)
}

fn resolve_targets<'a>(sim: &'a Simulation, targets: Option<&'a [f64]>) -> &'a [f64] {
    targets.unwrap_or(sim.target_response_times.as_slice())
}

fn for_each_judged_call(
    sim: &Simulation,
    targets: Option<&[f64]>,
    mut f: impl FnMut(&Call, bool),
) -> Result<()> {
    sim.require_complete()?;
    let targets = resolve_targets(sim, targets);

    for (index, call) in sim.calls.iter().enumerate() {
        let met = call_meets_target(call, targets).ok_or(AnalysisError::UnknownPriority {
            call: index,
            priority: call.priority,
            table_len: targets.len(),
        })?;
        f(call, met);
    }
    Ok(())
}
