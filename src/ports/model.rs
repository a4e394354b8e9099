//! Model port: Trait for turnaround prediction.
//!
//! Abstracts the concrete regression from the application logic so a
//! re-fitted model can be dropped in without touching the UI.

use crate::domain::{AircraftProfile, CoefficientTable, Forecast};

/// A fitted turnaround model.
///
/// Implementations must be pure: the same profile always yields the same
/// forecast, and calls may happen concurrently.
pub trait TurnaroundModel: Send + Sync {
    /// Human-readable model name.
    fn name(&self) -> &str;

    /// Coefficients the model evaluates.
    fn coefficients(&self) -> &CoefficientTable;

    /// Predict the turnaround for one profile.
    ///
    /// Numeric inputs are not range-checked; values outside the calculator's
    /// ranges extrapolate.
    fn forecast(&self, profile: &AircraftProfile) -> Forecast;
}
