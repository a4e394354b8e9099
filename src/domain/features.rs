//! Engineered features derived from an aircraft profile.

use serde::{Deserialize, Serialize};

use super::{AircraftProfile, CoefficientTable};

/// Cycles value substituted for zero before taking the logarithm.
///
/// `ln(0)` is undefined, so a profile with zero annual cycles gets the same
/// log term as one with 0.1 cycles.
pub const ZERO_CYCLES_SENTINEL: f64 = 0.1;

/// Features computed from the raw inputs for one forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineeredFeatures {
    pub age_squared: f64,
    pub age_times_utilisation: f64,
    pub log_cycles: f64,
    /// Offset of the profile's region (0 for the baseline)
    pub region_offset: f64,
}

impl EngineeredFeatures {
    /// Derive features in formula order: polynomial, interaction, log, region.
    #[must_use]
    pub fn derive(profile: &AircraftProfile, table: &CoefficientTable) -> Self {
        let age = f64::from(profile.age);
        let age_squared = age * age;
        let age_times_utilisation = age * profile.avg_daily_utilisation;
        let log_cycles = guarded_cycles(profile.avg_annual_cycles).ln();
        let region_offset = table.region_weight(profile.region);

        Self {
            age_squared,
            age_times_utilisation,
            log_cycles,
            region_offset,
        }
    }
}

/// Cycles value fed to the log transform.
fn guarded_cycles(cycles: f64) -> f64 {
    if cycles > 0.0 {
        cycles
    } else {
        ZERO_CYCLES_SENTINEL
    }
}
