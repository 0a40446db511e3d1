//! JSON rendering of analysis reports.
//!
//! Non-finite floats serialize as `null`.

use crate::report::AnalysisReport;

/// Render an [`AnalysisReport`] as single-line JSON.
///
/// Unset steady-state or service-level sections appear as `null`.
pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Render an [`AnalysisReport`] as indented JSON, for files meant to be read
/// by people.
pub fn to_json_pretty(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
