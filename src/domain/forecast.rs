//! Forecast result types.

use serde::{Deserialize, Serialize};

use super::{AircraftProfile, EngineeredFeatures};

/// Additive terms of the turnaround formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Intercept,
    Age,
    AnnualCycles,
    AnnualHours,
    DailyUtilisation,
    AgeSquared,
    AgeTimesUtilisation,
    LogCycles,
    RegionOffset,
}

impl Term {
    /// Short label for breakdown tables.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intercept => "Intercept",
            Self::Age => "Age",
            Self::AnnualCycles => "Annual cycles",
            Self::AnnualHours => "Annual hours",
            Self::DailyUtilisation => "Daily utilisation",
            Self::AgeSquared => "Age²",
            Self::AgeTimesUtilisation => "Age × utilisation",
            Self::LogCycles => "ln(cycles)",
            Self::RegionOffset => "Region offset",
        }
    }
}

/// One term's share of the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermContribution {
    pub term: Term,
    /// Coefficient applied to the term
    pub weight: f64,
    /// Feature value the weight multiplies (1.0 for intercept and region)
    pub value: f64,
    /// `weight * value`
    pub contribution: f64,
}

impl TermContribution {
    #[must_use]
    pub fn new(term: Term, weight: f64, value: f64) -> Self {
        Self {
            term,
            weight,
            value,
            contribution: weight * value,
        }
    }
}

/// Predicted turnaround time for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Predicted turnaround, full precision
    pub days: f64,

    /// Inputs the forecast was computed from
    pub profile: AircraftProfile,

    /// Engineered features used by the formula
    pub features: EngineeredFeatures,

    /// Per-term contributions, in formula order; they sum to `days`
    pub terms: Vec<TermContribution>,
}

impl Forecast {
    /// Presentation form: one decimal place with a unit suffix.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_days(self.days)
    }

    /// Contribution of a single term, if present.
    #[must_use]
    pub fn contribution(&self, term: Term) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.term == term)
            .map(|t| t.contribution)
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Format a day count the way the calculator displays it.
#[must_use]
pub fn format_days(days: f64) -> String {
    format!("{days:.1} days")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(11.816_988), "11.8 days");
        assert_eq!(format_days(-3.04), "-3.0 days");
        assert_eq!(format_days(0.0), "0.0 days");
    }

    #[test]
    fn test_term_contribution() {
        let c = TermContribution::new(Term::AgeSquared, 0.1345, 144.0);
        assert!((c.contribution - 19.368).abs() < 1e-9);
        assert_eq!(c.term.label(), "Age²");
    }
}
