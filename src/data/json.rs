//! JSON deserialization of simulation records.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::DataError;
use crate::model::Simulation;

/// Load a simulation record from a JSON file.
pub fn load_simulation_json(path: &Path) -> Result<Simulation, DataError> {
    let file = File::open(path)?;
    let sim = serde_json::from_reader(BufReader::new(file))?;
    Ok(sim)
}

/// Parse a simulation record from a JSON string.
pub fn simulation_from_json_str(json: &str) -> Result<Simulation, DataError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_record() {
        let json = r#"{
            "complete": true,
            "start_time": 0.0,
            "end_time": 2.0,
            "calls": [
                {"arrival_time": 0.1, "response_time": 0.01, "priority": 0},
                {"arrival_time": 0.4, "response_time": null, "priority": 1}
            ],
            "target_response_times": [0.0083, 0.0208]
        }"#;
        let sim = simulation_from_json_str(json).unwrap();
        assert!(sim.complete);
        assert_eq!(sim.num_calls(), 2);
        assert_eq!(sim.num_unanswered(), 1);
        assert!(sim.ambulances.is_empty());
        assert_eq!(sim.target_response_times.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            simulation_from_json_str("{\"complete\": tru"),
            Err(DataError::Json(_))
        ));
    }
}
