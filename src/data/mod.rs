//! Loading recorded simulation runs from disk.
//!
//! # Supported Formats
//!
//! - **JSON**: a serialized [`Simulation`](crate::model::Simulation), with
//!   `null` marking unanswered calls
//! - **Calls CSV**: `arrival,response,priority` rows, one call per line;
//!   an empty or `null` response marks an unanswered call
//!
//! # Example
//!
//! ```ignore
//! use dispatch_analysis::data::load_simulation_json;
//! use std::path::Path;
//!
//! let sim = load_simulation_json(Path::new("run.json"))?;
//! println!("Loaded {} calls", sim.num_calls());
//! ```

mod csv;
mod json;
mod units;

pub use csv::{load_calls_csv, parse_calls_csv};
pub use json::{load_simulation_json, simulation_from_json_str};
pub use units::{convert_days, TimeUnit};

/// Errors that can occur while loading a simulation record.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// IO error reading file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parse error at a specific line.
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// Invalid numeric field.
    #[error("Invalid {field} at line {line}: '{value}'")]
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// Column name.
        field: &'static str,
        /// The invalid value string.
        value: String,
    },
}
