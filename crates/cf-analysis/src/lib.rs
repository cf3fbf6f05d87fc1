//! cf-analysis: GUI-facing analysis service for channelflow.
//!
//! This crate is the boundary between frontends and the hydraulic core. It
//! accepts the raw input records a wizard-style UI assembles, validates every
//! field with a specific user-facing message, runs the normal-depth solver,
//! and flattens the outcome into a presentation-ready `CalculationResults`.
//!
//! Nothing here returns `Err` across the boundary: every path, including
//! rejected input and solver non-convergence, produces a well-formed result
//! record with `is_valid` and an explanatory message.

pub mod service;
pub mod types;
pub mod validate;

// Re-export key types for convenience
pub use service::calculate;
pub use types::{CalculationResults, ChannelKind, GeometryData, HydraulicData, ProjectData};
pub use validate::{validate_inputs, ValidationError};
