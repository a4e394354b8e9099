//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and the model implementation / coefficient
//! storage.

mod coefficients;
mod model;

pub use coefficients::CoefficientSource;
pub use model::TurnaroundModel;
