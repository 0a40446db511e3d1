//! Simulation time with an explicit "null" marker.

use serde::{Deserialize, Serialize};

use crate::constants::NULL_TIME;

/// A point or span of simulation time that may be unset.
///
/// The unset state is [`SimTime::NULL`], stored as [`NULL_TIME`]. Use
/// [`SimTime::get`] rather than comparing raw values so the sentinel never
/// leaks into arithmetic. Serialized as a number, or `null` when unset.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub struct SimTime(f64);

impl SimTime {
    /// The "not applicable / not yet occurred" time.
    pub const NULL: SimTime = SimTime(NULL_TIME);

    /// Wrap a recorded time value.
    ///
    /// The value is stored as given; passing [`NULL_TIME`] yields a null time.
    pub const fn new(value: f64) -> Self {
        SimTime(value)
    }

    /// The null time, usable as a serde default.
    pub const fn null() -> Self {
        Self::NULL
    }

    /// Whether this is the null time.
    pub fn is_null(&self) -> bool {
        self.0 == NULL_TIME
    }

    /// The recorded time, or `None` for the null time.
    pub fn get(&self) -> Option<f64> {
        if self.is_null() {
            None
        } else {
            Some(self.0)
        }
    }

    /// The raw value including the sentinel.
    pub fn raw(&self) -> f64 {
        self.0
    }
}

impl Default for SimTime {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<Option<f64>> for SimTime {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SimTime::NULL, SimTime)
    }
}

impl From<SimTime> for Option<f64> {
    fn from(value: SimTime) -> Self {
        value.get()
    }
}
