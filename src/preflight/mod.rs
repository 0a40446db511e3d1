//! Checks to run on batch means before trusting them as independent samples.
//!
//! # Checks Provided
//!
//! - **Serial correlation**: Durbin-Watson test of the batch-mean sequence
//!   against a constant-mean model
//! - **Autocorrelation function**: sample ACF for inspecting correlation
//!   decay across lags

mod serial_correlation;

pub use serial_correlation::{
    autocorrelation, autocorrelation_function, check_batch_independence, durbin_watson_test,
    DurbinWatson, SerialCorrelationWarning,
};
