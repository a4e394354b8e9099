//! MRO region categories.
//!
//! The fitted model dummy-encodes the region with East Asia as the dropped
//! (baseline) category, so only the other three regions carry an offset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error raised when region text does not name one of the known regions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("Invalid MRO region {0:?} (expected one of: East Asia, Middle East, SE Asia, USA)")]
    InvalidRegion(String),
}

/// Region where the MRO check is performed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Region {
    /// Baseline category (offset 0)
    #[default]
    #[serde(rename = "East Asia")]
    EastAsia,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "SE Asia")]
    SeAsia,
    #[serde(rename = "USA")]
    Usa,
}

/// Prefix of the dummy columns in the regression export.
const DUMMY_COLUMN_PREFIX: &str = "mro_region_";

impl Region {
    /// All regions in selector order.
    pub const ALL: [Region; 4] = [
        Region::EastAsia,
        Region::MiddleEast,
        Region::SeAsia,
        Region::Usa,
    ];

    /// The baseline category of the dummy encoding.
    pub const BASELINE: Region = Region::EastAsia;

    /// Human-readable label, as shown in the calculator.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::EastAsia => "East Asia",
            Self::MiddleEast => "Middle East",
            Self::SeAsia => "SE Asia",
            Self::Usa => "USA",
        }
    }

    #[must_use]
    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }

    /// Next region in selector order (wraps).
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous region in selector order (wraps).
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Self::EastAsia => 0,
            Self::MiddleEast => 1,
            Self::SeAsia => 2,
            Self::Usa => 3,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    /// Accepts display labels ("SE Asia"), identifiers ("SEAsia") and the
    /// regression dummy column names ("mro_region_SE Asia"). Case, spaces,
    /// underscores and hyphens are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = match trimmed.get(..DUMMY_COLUMN_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(DUMMY_COLUMN_PREFIX) => {
                &trimmed[DUMMY_COLUMN_PREFIX.len()..]
            }
            _ => trimmed,
        };

        let key: String = body
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "eastasia" => Ok(Self::EastAsia),
            "middleeast" => Ok(Self::MiddleEast),
            "seasia" => Ok(Self::SeAsia),
            "usa" => Ok(Self::Usa),
            _ => Err(RegionError::InvalidRegion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_and_identifiers() {
        assert_eq!("East Asia".parse::<Region>(), Ok(Region::EastAsia));
        assert_eq!("MiddleEast".parse::<Region>(), Ok(Region::MiddleEast));
        assert_eq!("SEAsia".parse::<Region>(), Ok(Region::SeAsia));
        assert_eq!(" se asia ".parse::<Region>(), Ok(Region::SeAsia));
        assert_eq!("usa".parse::<Region>(), Ok(Region::Usa));
    }

    #[test]
    fn test_parse_dummy_column_names() {
        assert_eq!(
            "mro_region_Middle East".parse::<Region>(),
            Ok(Region::MiddleEast)
        );
        assert_eq!("MRO_REGION_USA".parse::<Region>(), Ok(Region::Usa));
    }

    #[test]
    fn test_unknown_region_rejected() {
        let err = "Europe".parse::<Region>().unwrap_err();
        assert_eq!(err, RegionError::InvalidRegion("Europe".to_string()));
        assert!("".parse::<Region>().is_err());
        assert!("Asia".parse::<Region>().is_err());
    }

    #[test]
    fn test_selector_cycle() {
        let mut region = Region::EastAsia;
        for _ in 0..Region::ALL.len() {
            region = region.next();
        }
        assert_eq!(region, Region::EastAsia);
        assert_eq!(Region::EastAsia.prev(), Region::Usa);
        assert_eq!(Region::Usa.next(), Region::EastAsia);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>(), Ok(region));
        }
        assert!(Region::default().is_baseline());
    }
}
