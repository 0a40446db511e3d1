//! Ambulance fleet reporting.

use crate::data::TimeUnit;
use crate::error::{AnalysisError, Result};
use crate::model::Simulation;
use crate::statistics::Summary;

/// Statistics of per-ambulance total travel time, in `unit`.
///
/// # Errors
///
/// [`AnalysisError::InsufficientData`] if the fleet is empty.
pub fn travel_time_summary(sim: &Simulation, unit: TimeUnit) -> Result<Summary> {
    sim.require_complete()?;
    if sim.ambulances.is_empty() {
        return Err(AnalysisError::InsufficientData {
            what: "travel-time summary",
            got: 0,
            min: 1,
        });
    }
    Summary::from_iter_values(
        sim.ambulances
            .iter()
            .map(|a| unit.from_days(a.total_travel_time)),
    )
}
