//! # dispatch-analysis
//!
//! Post-hoc statistical analysis of emergency dispatch simulation runs.
//!
//! Given the recorded calls and ambulances of a finished run, this crate
//! produces:
//! - Response-time summaries and percentiles over answered calls
//! - Service-level compliance against per-priority target response times
//! - Steady-state mean response time via the batch-means method, with a
//!   confidence interval
//! - A Durbin-Watson check that the batch means are not serially correlated
//!
//! ## Batch Means
//!
//! The run is cut into fixed-width, half-open time windows after dropping a
//! warm-up and cool-down period. Each window's mean response time is one
//! sample; if the windows are wide enough those samples are close to
//! independent, and a Student-t interval over them is valid. The
//! Durbin-Watson p-value tells you whether they are not.
//!
//! ```ignore
//! use dispatch_analysis::{DispatchAnalyzer, TimeUnit};
//! use dispatch_analysis::data::load_simulation_json;
//!
//! let sim = load_simulation_json("run.json".as_ref())?;
//! let report = DispatchAnalyzer::with_batch_time(0.5)
//!     .warm_up(1.0)
//!     .time_unit(TimeUnit::Minutes)
//!     .analyze(&sim)?;
//!
//! match &report.steady_state {
//!     Some(ss) if ss.batches_independent() => {
//!         println!("{:.1} ± {:.1} min", ss.estimate.mean, ss.estimate.error);
//!     }
//!     Some(ss) => println!("batches correlated (p = {:.3})", ss.independence.p_value),
//!     None => println!("run too short for batch means"),
//! }
//! ```
//!
//! ## Lower-level API
//!
//! The pieces are usable on their own:
//!
//! ```ignore
//! use dispatch_analysis::statistics::batch_means;
//! use dispatch_analysis::preflight::durbin_watson_test;
//! use dispatch_analysis::MeasurementSeries;
//!
//! let series = MeasurementSeries::new(times, values)?;
//! let batches = batch_means(&series, 1.0, 0.0, 10.0)?;
//! let dw = durbin_watson_test(&batches.means)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod constants;
mod error;
mod report;
mod types;

// Functional modules
pub mod analysis;
pub mod data;
pub mod model;
pub mod output;
pub mod preflight;
pub mod statistics;

// Re-exports for public API
pub use analyzer::DispatchAnalyzer;
pub use config::AnalysisConfig;
pub use constants::{MINUTES_PER_DAY, NULL_TIME};
pub use data::{DataError, TimeUnit};
pub use error::{AnalysisError, Result};
pub use model::{Ambulance, Call, SimTime, Simulation};
pub use report::{AnalysisReport, Percentile};
pub use types::{BatchWindow, MeasurementSeries};
