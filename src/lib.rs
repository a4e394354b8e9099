//! # MRO Forecast
//!
//! Aircraft Maintenance, Repair & Overhaul (MRO) turnaround calculator.
//!
//! Predicts the expected turnaround time in days from aircraft age, annual
//! cycles, annual hours, daily utilisation and MRO region, using a fixed
//! OLS regression (R² = 0.74). Region effects are relative to the East Asia
//! baseline.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and the pure prediction engine
//! - `ports`: Trait definitions for the model and coefficient sources
//! - `adapters`: Concrete implementations (OLS model, built-in/JSON tables)
//! - `application`: Forecast use cases
//! - `tui`: Terminal user interface
//! - `config`: Environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{AircraftProfile, CoefficientTable, Forecast, Region};

/// Result type for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Main error type for the crate
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    #[error(transparent)]
    InvalidRegion(#[from] domain::RegionError),

    #[error("Unusable coefficient table: {0}")]
    Coefficients(#[from] domain::CoefficientError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
