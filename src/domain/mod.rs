//! Domain layer: Core types and the prediction engine.
//!
//! Pure Rust with no I/O. The coefficient table is always passed in
//! explicitly; nothing here reads global state.

mod aircraft;
mod coefficients;
pub mod engine;
mod features;
mod forecast;
mod region;

pub use aircraft::{
    AircraftProfile, AGE_RANGE, DEFAULT_AGE, DEFAULT_ANNUAL_CYCLES, DEFAULT_ANNUAL_HOURS,
    DEFAULT_DAILY_UTILISATION,
};
pub use coefficients::{
    CoefficientError, CoefficientFile, CoefficientTable, FeatureWeights, RegionOffsets,
};
pub use engine::{predict, predict_days};
pub use features::{EngineeredFeatures, ZERO_CYCLES_SENTINEL};
pub use forecast::{format_days, Forecast, Term, TermContribution};
pub use region::{Region, RegionError};
