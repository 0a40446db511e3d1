//! Constants used throughout the crate.

/// Reserved "null time" marking a time that was never recorded.
///
/// Valid simulation times are finite and non-negative, so negative infinity
/// can never collide with a real measurement.
pub const NULL_TIME: f64 = f64::NEG_INFINITY;

/// Minutes per simulated day. Simulation clocks run in day fractions.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Hours per simulated day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per simulated day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// Default configuration constants
// =============================================================================

/// Default confidence level for mean-with-error estimates.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default significance level for the batch independence check.
pub const DEFAULT_INDEPENDENCE_ALPHA: f64 = 0.05;

/// Default response-time percentiles reported alongside the mean.
pub const DEFAULT_PERCENTILES: [f64; 2] = [0.5, 0.9];

/// Minimum number of batch means for the Durbin-Watson test.
pub const MIN_BATCHES_FOR_DIAGNOSTIC: usize = 2;

/// Minimum replicates for a confidence interval (one degree of freedom).
pub const MIN_REPLICATES_FOR_CI: usize = 2;
