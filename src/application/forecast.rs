//! Forecast service: the calculator's use cases.
//!
//! Wraps a `TurnaroundModel` and exposes:
//! - typed forecasts for the UI
//! - the raw `predict` entry point taking region text
//! - range-checked forecasts for form input

use std::sync::Arc;

use crate::adapters::OlsModel;
use crate::domain::{AircraftProfile, Forecast, Region};
use crate::ports::{CoefficientSource, TurnaroundModel};
use crate::ForecastError;

/// Service for turnaround forecasts.
///
/// Holds the model behind an `Arc`; clones share it and may be used from
/// several threads at once.
pub struct ForecastService<M>
where
    M: TurnaroundModel,
{
    model: Arc<M>,
}

impl<M> Clone for ForecastService<M>
where
    M: TurnaroundModel,
{
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl ForecastService<OlsModel> {
    /// Build the service from a coefficient source.
    ///
    /// # Errors
    /// Returns error if the table cannot be loaded.
    pub fn from_source(source: &dyn CoefficientSource) -> Result<Self, ForecastError> {
        tracing::info!("Loading coefficients from {}", source.describe());
        let table = source.load()?;
        Ok(Self::new(Arc::new(OlsModel::new(table))))
    }
}

impl<M> ForecastService<M>
where
    M: TurnaroundModel,
{
    /// Create a new forecast service.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Forecast for a typed profile. Never fails; inputs extrapolate.
    #[must_use]
    pub fn forecast(&self, profile: &AircraftProfile) -> Forecast {
        let forecast = self.model.forecast(profile);
        tracing::debug!(
            "Forecast age={} cycles={} hours={} util={} region={} -> {:.4} days",
            profile.age,
            profile.avg_annual_cycles,
            profile.avg_annual_hours,
            profile.avg_daily_utilisation,
            profile.region,
            forecast.days
        );
        forecast
    }

    /// Forecast only if the profile is inside the calculator's ranges.
    ///
    /// # Errors
    /// Returns `ForecastError::Validation` listing every violated range.
    pub fn forecast_checked(&self, profile: &AircraftProfile) -> Result<Forecast, ForecastError> {
        profile
            .validate()
            .map_err(|errors| ForecastError::Validation(errors.join(", ")))?;
        Ok(self.forecast(profile))
    }

    /// Predict turnaround days from raw inputs.
    ///
    /// `region` is parsed leniently (labels, identifiers, dummy column names).
    ///
    /// # Errors
    /// Returns `ForecastError::InvalidRegion` if `region` names no known region.
    pub fn predict(
        &self,
        age: u32,
        avg_annual_cycles: f64,
        avg_annual_hours: f64,
        avg_daily_utilisation: f64,
        region: &str,
    ) -> Result<f64, ForecastError> {
        let region: Region = region.parse().map_err(|e| {
            tracing::warn!("Rejected forecast request: {}", e);
            ForecastError::from(e)
        })?;

        let profile = AircraftProfile::new(
            age,
            avg_annual_cycles,
            avg_annual_hours,
            avg_daily_utilisation,
            region,
        );
        Ok(self.forecast(&profile).days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{BuiltinCoefficients, JsonCoefficientFile};
    use crate::domain::{CoefficientTable, RegionError};

    fn create_test_service() -> ForecastService<OlsModel> {
        ForecastService::new(Arc::new(OlsModel::fitted()))
    }

    #[test]
    fn test_predict_default_inputs() {
        let service = create_test_service();
        let days = service
            .predict(12, 100.0, 2000.0, 8.0, "East Asia")
            .expect("Should predict");
        assert!((days - 11.816_988_262_956).abs() < 1e-6);
    }

    #[test]
    fn test_predict_rejects_unknown_region() {
        let service = create_test_service();
        let err = service
            .predict(12, 100.0, 2000.0, 8.0, "Europe")
            .unwrap_err();
        match err {
            ForecastError::InvalidRegion(RegionError::InvalidRegion(name)) => {
                assert_eq!(name, "Europe")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_region_difference_matches_offset() {
        let service = create_test_service();
        let east = service
            .predict(12, 100.0, 2000.0, 8.0, "EastAsia")
            .expect("east");
        let middle = service
            .predict(12, 100.0, 2000.0, 8.0, "MiddleEast")
            .expect("middle");
        assert!(((middle - east) - (-21.4115)).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_checked_rejects_out_of_range() {
        let service = create_test_service();
        let profile = AircraftProfile {
            age: 31,
            avg_daily_utilisation: -2.0,
            ..Default::default()
        };
        match service.forecast_checked(&profile) {
            Err(ForecastError::Validation(msg)) => {
                assert!(msg.contains("Age 31"));
                assert!(msg.contains("Daily utilisation"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        // The unchecked path still extrapolates.
        assert!(service.forecast(&profile).days.is_finite());
    }

    #[test]
    fn test_from_source() {
        let builtin = ForecastService::from_source(&BuiltinCoefficients).expect("builtin");
        let shipped = ForecastService::from_source(&JsonCoefficientFile::new(
            "models/coefficients.json",
        ))
        .expect("shipped");
        let profile = AircraftProfile::default();
        assert_eq!(
            builtin.forecast(&profile).days,
            shipped.forecast(&profile).days
        );
        assert_eq!(builtin.model().coefficients(), &CoefficientTable::fitted());
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let service = create_test_service();
        let expected = service.forecast(&AircraftProfile::default()).days;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = service.clone();
                std::thread::spawn(move || svc.forecast(&AircraftProfile::default()).days)
            })
            .collect();

        for handle in handles {
            let days = handle.join().expect("thread should finish");
            assert_eq!(days.to_bits(), expected.to_bits());
        }
    }
}
