//! Aircraft utilisation profile: the raw inputs of one forecast.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::Region;

/// Age range offered by the calculator (years).
pub const AGE_RANGE: RangeInclusive<u32> = 1..=30;

pub const DEFAULT_AGE: u32 = 12;
pub const DEFAULT_ANNUAL_CYCLES: f64 = 100.0;
pub const DEFAULT_ANNUAL_HOURS: f64 = 2000.0;
pub const DEFAULT_DAILY_UTILISATION: f64 = 8.0;

/// Raw inputs for a single turnaround forecast.
///
/// The prediction engine accepts any values here; `validate` reports the
/// ranges the calculator form enforces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    /// Aircraft age in years
    pub age: u32,

    /// Average flight cycles per year
    pub avg_annual_cycles: f64,

    /// Average flight hours per year
    pub avg_annual_hours: f64,

    /// Average daily utilisation (hours/day)
    pub avg_daily_utilisation: f64,

    /// Region where the check is performed
    pub region: Region,
}

impl Default for AircraftProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            avg_annual_cycles: DEFAULT_ANNUAL_CYCLES,
            avg_annual_hours: DEFAULT_ANNUAL_HOURS,
            avg_daily_utilisation: DEFAULT_DAILY_UTILISATION,
            region: Region::default(),
        }
    }
}

impl AircraftProfile {
    #[must_use]
    pub fn new(
        age: u32,
        avg_annual_cycles: f64,
        avg_annual_hours: f64,
        avg_daily_utilisation: f64,
        region: Region,
    ) -> Self {
        Self {
            age,
            avg_annual_cycles,
            avg_annual_hours,
            avg_daily_utilisation,
            region,
        }
    }

    /// Check the inputs against the calculator's declared ranges.
    ///
    /// # Errors
    /// Returns every violated constraint as a message.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !AGE_RANGE.contains(&self.age) {
            errors.push(format!(
                "Age {} out of range [{}, {}]",
                self.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ));
        }
        check_non_negative(&mut errors, "Annual cycles", self.avg_annual_cycles);
        check_non_negative(&mut errors, "Annual hours", self.avg_annual_hours);
        check_non_negative(&mut errors, "Daily utilisation", self.avg_daily_utilisation);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_non_negative(errors: &mut Vec<String>, label: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("{label} must be a finite number"));
    } else if value < 0.0 {
        errors.push(format!("{label} {value} must not be negative"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calculator() {
        let profile = AircraftProfile::default();
        assert_eq!(profile.age, 12);
        assert!((profile.avg_annual_cycles - 100.0).abs() < f64::EPSILON);
        assert!((profile.avg_annual_hours - 2000.0).abs() < f64::EPSILON);
        assert!((profile.avg_daily_utilisation - 8.0).abs() < f64::EPSILON);
        assert_eq!(profile.region, Region::EastAsia);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let invalid = AircraftProfile {
            age: 0,
            avg_annual_cycles: -1.0,
            avg_annual_hours: f64::NAN,
            ..Default::default()
        };
        let errors = invalid.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("Age 0"));
    }

    #[test]
    fn test_zero_usage_is_valid() {
        let parked = AircraftProfile::new(30, 0.0, 0.0, 0.0, Region::Usa);
        assert!(parked.validate().is_ok());
    }
}
