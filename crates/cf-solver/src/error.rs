//! Error types for solver operations.

use cf_geometry::GeometryError;
use thiserror::Error;

/// Errors that can occur during normal-depth solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid flow: discharge and Manning's n must be positive")]
    InvalidFlow,

    #[error("Invalid bed slope: {value} (must be greater than zero)")]
    InvalidSlope { value: f64 },

    #[error("Invalid section: all shape parameters must be positive")]
    InvalidSection,

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: &'static str },

    #[error("Non-finite value: {what}")]
    Numeric { what: &'static str },

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

pub type SolverResult<T> = Result<T, SolverError>;
