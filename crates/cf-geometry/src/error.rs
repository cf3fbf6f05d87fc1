//! Error types for cross-section calculations.

use thiserror::Error;

/// Errors that can occur when evaluating section properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate section: {what}")]
    DegenerateSection { what: &'static str },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
