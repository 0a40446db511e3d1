//! Output formatting for analysis results.
//!
//! Rendering of tables and plots is left to the consumer; this module
//! provides the machine-readable hand-off:
//! - JSON: serialization of [`AnalysisReport`](crate::AnalysisReport)

mod json;

pub use json::{to_json, to_json_pretty};
