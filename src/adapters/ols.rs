//! OLS adapter: Implementation of `TurnaroundModel` over a coefficient table.

use crate::domain::{self, AircraftProfile, CoefficientTable, Forecast};
use crate::ports::TurnaroundModel;

/// Linear regression model evaluated in closed form.
#[derive(Debug, Clone)]
pub struct OlsModel {
    table: CoefficientTable,
}

impl OlsModel {
    /// Wrap an already validated table.
    #[must_use]
    pub fn new(table: CoefficientTable) -> Self {
        tracing::info!(
            "Initializing OlsModel '{}' (intercept={}, r_squared={:?})",
            table.name,
            table.intercept,
            table.r_squared
        );
        Self { table }
    }

    /// Model with the built-in fitted coefficients.
    #[must_use]
    pub fn fitted() -> Self {
        Self::new(CoefficientTable::fitted())
    }
}

impl Default for OlsModel {
    fn default() -> Self {
        Self::fitted()
    }
}

impl TurnaroundModel for OlsModel {
    fn name(&self) -> &str {
        &self.table.name
    }

    fn coefficients(&self) -> &CoefficientTable {
        &self.table
    }

    fn forecast(&self, profile: &AircraftProfile) -> Forecast {
        domain::predict(&self.table, profile)
    }
}
