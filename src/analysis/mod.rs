//! Analysis of a completed simulation run.
//!
//! 1. **Response times** ([`response`]): summaries and percentiles over answered calls
//! 2. **Service level** ([`service_level`]): compliance with per-priority targets
//! 3. **Fleet** ([`fleet`]): ambulance travel-time summary
//! 4. **Batching** ([`batching`]): response-time batch means over the steady-state window
//! 5. **Steady state** ([`steady_state`]): confidence interval and independence check
//!    over batch means
//!
//! Every entry point requires `Simulation::complete`.

pub mod batching;
pub mod fleet;
pub mod response;
pub mod service_level;
pub mod steady_state;

pub use batching::{response_time_batches, ResponseTimeBatches};
pub use fleet::travel_time_summary;
pub use response::{
    answered_response_times, average_response_time, response_time_percentiles,
    response_time_summary, response_times, ResponseTimeSummary,
};
pub use service_level::{
    call_meets_target, calls_meeting_target, service_level_by_priority, ServiceLevel,
};
pub use steady_state::{has_enough_batches, steady_state_estimate, SteadyStateEstimate};
