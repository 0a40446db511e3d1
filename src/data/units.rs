//! Time unit conversion for reporting.
//!
//! The simulation clock runs in days; reports usually want minutes.

use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_DAY, SECONDS_PER_DAY};

/// Unit used when reporting simulation times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    /// Simulation clock units (no conversion).
    #[default]
    Days,

    /// Hours (multiply by 24).
    Hours,

    /// Minutes (multiply by 1440).
    Minutes,

    /// Seconds (multiply by 86400).
    Seconds,
}

impl TimeUnit {
    /// Number of this unit in one day.
    pub fn per_day(&self) -> f64 {
        match self {
            TimeUnit::Days => 1.0,
            TimeUnit::Hours => HOURS_PER_DAY,
            TimeUnit::Minutes => MINUTES_PER_DAY,
            TimeUnit::Seconds => SECONDS_PER_DAY,
        }
    }

    /// Convert a span given in days to this unit.
    pub fn from_days(&self, days: f64) -> f64 {
        days * self.per_day()
    }

    /// Convert a span in this unit back to days.
    pub fn to_days(&self, value: f64) -> f64 {
        value / self.per_day()
    }
}

/// Convert day-valued samples to `unit`.
pub fn convert_days(samples: &[f64], unit: TimeUnit) -> Vec<f64> {
    let factor = unit.per_day();
    samples.iter().map(|&s| s * factor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_passthrough() {
        assert_eq!(TimeUnit::Days.from_days(0.5), 0.5);
    }

    #[test]
    fn test_minutes_conversion() {
        // 15 minutes = 1/96 day
        assert!((TimeUnit::Minutes.from_days(1.0 / 96.0) - 15.0).abs() < 1e-9);
        assert!((TimeUnit::Minutes.to_days(15.0) - 1.0 / 96.0).abs() < 1e-12);
    }

    #[test]
    fn test_convert_days() {
        let hours = convert_days(&[0.5, 1.0, 0.25], TimeUnit::Hours);
        assert_eq!(hours, vec![12.0, 24.0, 6.0]);
    }
}
