//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the calculator's use cases.

mod forecast;

pub use forecast::ForecastService;
