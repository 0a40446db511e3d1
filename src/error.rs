//! Error types for simulation analysis.

use crate::data::DataError;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised by the analysis routines.
///
/// Every variant is fatal to the request that raised it. Nothing in this crate
/// retries or substitutes a default value for a failed computation.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The simulation run has not finished.
    #[error("simulation is not complete; analysis requires a finished run")]
    IncompleteSimulation,

    /// Paired series of different lengths.
    #[error("series length mismatch: {times} times vs {values} values")]
    LengthMismatch {
        /// Number of timestamps.
        times: usize,
        /// Number of values.
        values: usize,
    },

    /// A measurement series with no observations.
    #[error("measurement series is empty")]
    EmptySeries,

    /// A numeric parameter outside its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The null-time sentinel reached a measurement input.
    #[error("observation {index} carries the null-time sentinel")]
    SentinelValue {
        /// Index of the offending observation.
        index: usize,
    },

    /// NaN or infinite measurement.
    #[error("observation {index} is not finite")]
    NonFiniteValue {
        /// Index of the offending observation.
        index: usize,
    },

    /// Negative time or response time in a measurement input.
    #[error("observation {index} is negative; times and durations must be >= 0")]
    NegativeValue {
        /// Index of the offending observation.
        index: usize,
    },

    /// An included batch window received no observations.
    #[error(
        "batch {index} covering [{window_start}, {window_end}) has no observations; \
         widen the batch time or adjust the time range"
    )]
    EmptyBatch {
        /// Batch index.
        index: usize,
        /// Inclusive window start.
        window_start: f64,
        /// Exclusive window end.
        window_end: f64,
    },

    /// Too few batch means for the serial-correlation test.
    #[error("serial-correlation test needs at least 2 batch means, got {got}")]
    InsufficientBatches {
        /// Number of batch means supplied.
        got: usize,
    },

    /// Too few observations for a statistic.
    #[error("insufficient data for {what}: got {got}, need at least {min}")]
    InsufficientData {
        /// The statistic being computed.
        what: &'static str,
        /// Observations available.
        got: usize,
        /// Observations required.
        min: usize,
    },

    /// A call's priority has no entry in the target table.
    #[error("call {call} has priority {priority} but the target table has {table_len} entries")]
    UnknownPriority {
        /// Index of the call.
        call: usize,
        /// The call's priority.
        priority: usize,
        /// Length of the target table.
        table_len: usize,
    },

    /// Failure loading a simulation record.
    #[error(transparent)]
    Data(#[from] DataError),
}

impl AnalysisError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
