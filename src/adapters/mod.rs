//! Adapters layer: Concrete implementations of ports.
//!
//! - `ols`: closed-form evaluation of the linear regression
//! - `coefficients`: built-in and JSON coefficient tables

pub mod coefficients;
pub mod ols;

pub use coefficients::{source_for, BuiltinCoefficients, JsonCoefficientFile};
pub use ols::OlsModel;
