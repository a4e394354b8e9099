//! Coefficient table of the fitted turnaround regression.
//!
//! The table is an immutable value: it is built once (either the built-in
//! fit or a JSON export) and handed to the prediction engine explicitly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Region, RegionError};

/// Errors for coefficient tables that cannot be used for prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoefficientError {
    #[error("Coefficient {term} is not finite ({value})")]
    NonFinite { term: String, value: f64 },

    #[error("Missing offset for region {0}")]
    MissingRegionOffset(Region),

    #[error("Offset for region {0} given more than once")]
    DuplicateRegionOffset(Region),

    #[error("Baseline region East Asia must have offset 0, got {0}")]
    BaselineOffset(f64),

    #[error("Invalid R² {0} (expected 0..=1)")]
    InvalidRSquared(f64),

    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Slope weights for the numeric and engineered features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureWeights {
    pub age: f64,
    pub avg_annual_cycles: f64,
    pub avg_annual_hours: f64,
    pub avg_daily_utilisation: f64,
    pub age_squared: f64,
    pub age_x_util: f64,
    pub log_cycles: f64,
}

impl FeatureWeights {
    /// Term names paired with their weights, in formula order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("age", self.age),
            ("avg_annual_cycles", self.avg_annual_cycles),
            ("avg_annual_hours", self.avg_annual_hours),
            ("avg_daily_utilisation", self.avg_daily_utilisation),
            ("age_squared", self.age_squared),
            ("age_x_util", self.age_x_util),
            ("log_cycles", self.log_cycles),
        ]
    }
}

/// Offsets of the non-baseline regions relative to East Asia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionOffsets {
    pub middle_east: f64,
    pub se_asia: f64,
    pub usa: f64,
}

impl RegionOffsets {
    #[must_use]
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::EastAsia => 0.0,
            Region::MiddleEast => self.middle_east,
            Region::SeAsia => self.se_asia,
            Region::Usa => self.usa,
        }
    }
}

/// Fixed weights of the turnaround model.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// Model label shown in the UI
    pub name: String,

    /// Goodness of fit reported for the model, if known
    pub r_squared: Option<f64>,

    pub intercept: f64,
    pub weights: FeatureWeights,
    pub region_offsets: RegionOffsets,
}

impl CoefficientTable {
    /// The OLS fit the calculator ships with (R² = 0.74).
    #[must_use]
    pub fn fitted() -> Self {
        Self {
            name: "MRO turnaround OLS".to_string(),
            r_squared: Some(0.74),
            intercept: 46.2010,
            weights: FeatureWeights {
                age: -4.4149,
                avg_annual_cycles: 0.0064,
                avg_annual_hours: -0.00002693,
                avg_daily_utilisation: 0.3939,
                age_squared: 0.1345,
                age_x_util: 0.0010,
                log_cycles: -1.0003,
            },
            region_offsets: RegionOffsets {
                middle_east: -21.4115,
                se_asia: 2.4409,
                usa: -4.6034,
            },
        }
    }

    /// Offset added for `region`; zero for the baseline.
    #[must_use]
    pub fn region_weight(&self, region: Region) -> f64 {
        self.region_offsets.get(region)
    }

    /// Check that every coefficient is usable.
    ///
    /// # Errors
    /// Returns the first non-finite coefficient or an out-of-range R².
    pub fn validate(&self) -> Result<(), CoefficientError> {
        check_finite("intercept", self.intercept)?;
        for (term, value) in self.weights.named() {
            check_finite(term, value)?;
        }
        for region in Region::ALL.into_iter().filter(|r| !r.is_baseline()) {
            check_finite(region.label(), self.region_weight(region))?;
        }
        if let Some(r2) = self.r_squared {
            if !(0.0..=1.0).contains(&r2) {
                return Err(CoefficientError::InvalidRSquared(r2));
            }
        }
        Ok(())
    }
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self::fitted()
    }
}

fn check_finite(term: &str, value: f64) -> Result<(), CoefficientError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoefficientError::NonFinite {
            term: term.to_string(),
            value,
        })
    }
}

/// On-disk form of a coefficient table.
///
/// Region offsets are keyed by region text so exports can use either the
/// display labels or the regression's dummy column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoefficientFile {
    pub name: String,
    #[serde(default)]
    pub r_squared: Option<f64>,
    pub intercept: f64,
    pub weights: FeatureWeights,
    pub region_offsets: BTreeMap<String, f64>,
}

impl TryFrom<CoefficientFile> for CoefficientTable {
    type Error = CoefficientError;

    fn try_from(file: CoefficientFile) -> Result<Self, Self::Error> {
        let mut offsets: BTreeMap<Region, f64> = BTreeMap::new();
        for (key, value) in &file.region_offsets {
            let region: Region = key.parse()?;
            if region.is_baseline() && *value != 0.0 {
                return Err(CoefficientError::BaselineOffset(*value));
            }
            // Alias keys ("Middle East", "mro_region_Middle East") name one region.
            if offsets.insert(region, *value).is_some() {
                return Err(CoefficientError::DuplicateRegionOffset(region));
            }
        }

        let offset = |region: Region| {
            offsets
                .get(&region)
                .copied()
                .ok_or(CoefficientError::MissingRegionOffset(region))
        };

        let table = Self {
            name: file.name,
            r_squared: file.r_squared,
            intercept: file.intercept,
            weights: file.weights,
            region_offsets: RegionOffsets {
                middle_east: offset(Region::MiddleEast)?,
                se_asia: offset(Region::SeAsia)?,
                usa: offset(Region::Usa)?,
            },
        };
        table.validate()?;
        Ok(table)
    }
}

impl From<&CoefficientTable> for CoefficientFile {
    fn from(table: &CoefficientTable) -> Self {
        let region_offsets = Region::ALL
            .into_iter()
            .filter(|r| !r.is_baseline())
            .map(|r| (r.label().to_string(), table.region_weight(r)))
            .collect();

        Self {
            name: table.name.clone(),
            r_squared: table.r_squared,
            intercept: table.intercept,
            weights: table.weights,
            region_offsets,
        }
    }
}
