//! Prediction engine: feature engineering followed by the weighted sum.
//!
//! Pure functions of the profile and the coefficient table. No I/O, no
//! logging, no shared state; safe to call from any thread.

use super::{
    AircraftProfile, CoefficientTable, EngineeredFeatures, Forecast, Term, TermContribution,
};

/// Predicted turnaround in days, full precision.
#[must_use]
pub fn predict_days(table: &CoefficientTable, profile: &AircraftProfile) -> f64 {
    predict(table, profile).days
}

/// Full forecast including engineered features and the term breakdown.
///
/// `days` is accumulated term by term in formula order, so it equals the
/// sum of `terms` exactly.
#[must_use]
pub fn predict(table: &CoefficientTable, profile: &AircraftProfile) -> Forecast {
    let features = EngineeredFeatures::derive(profile, table);
    let w = &table.weights;
    let age = f64::from(profile.age);

    let terms = vec![
        TermContribution::new(Term::Intercept, table.intercept, 1.0),
        TermContribution::new(Term::Age, w.age, age),
        TermContribution::new(Term::AnnualCycles, w.avg_annual_cycles, profile.avg_annual_cycles),
        TermContribution::new(Term::AnnualHours, w.avg_annual_hours, profile.avg_annual_hours),
        TermContribution::new(
            Term::DailyUtilisation,
            w.avg_daily_utilisation,
            profile.avg_daily_utilisation,
        ),
        TermContribution::new(Term::AgeSquared, w.age_squared, features.age_squared),
        TermContribution::new(
            Term::AgeTimesUtilisation,
            w.age_x_util,
            features.age_times_utilisation,
        ),
        TermContribution::new(Term::LogCycles, w.log_cycles, features.log_cycles),
        TermContribution::new(Term::RegionOffset, features.region_offset, 1.0),
    ];

    let days = terms.iter().fold(0.0, |acc, t| acc + t.contribution);

    Forecast {
        days,
        profile: *profile,
        features,
        terms,
    }
}
