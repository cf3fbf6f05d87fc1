//! cf-core: stable foundation for channelflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (unit-system constants and display labels)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
