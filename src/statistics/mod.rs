//! Statistical building blocks for simulation analysis.
//!
//! - Batch-means partitioning of time-stamped series
//! - Descriptive summaries (mean, standard deviation, range)
//! - Student-t confidence intervals for replicate means
//! - Type 2 quantiles

mod batch_means;
mod confidence;
mod descriptive;
mod quantile;

pub use batch_means::{batch_means, batch_means_in, BatchAccumulator, BatchMeans};
pub use confidence::{mean_with_ci, mean_with_ci_table, t_quantile, MeanWithError};
pub use descriptive::Summary;
pub use quantile::{quantile_sorted, quantiles};
