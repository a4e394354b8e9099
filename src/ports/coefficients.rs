//! Coefficient source port: where the fitted weights come from.

use crate::domain::CoefficientTable;
use crate::ForecastError;

/// Provider of a coefficient table, read once at start-up.
pub trait CoefficientSource {
    /// Short description for logs (e.g. a file path).
    fn describe(&self) -> String;

    /// Load and validate the table.
    ///
    /// # Errors
    /// Returns error if the table cannot be read or has unusable values.
    fn load(&self) -> Result<CoefficientTable, ForecastError>;
}
