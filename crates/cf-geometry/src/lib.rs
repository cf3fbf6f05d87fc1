//! cf-geometry: open-channel cross-section library.
//!
//! Provides closed-form geometric properties for the supported channel
//! cross-sections (rectangular, trapezoidal, triangular) as pure functions of
//! flow depth, plus the flow descriptor pairing discharge with Manning
//! roughness.
//!
//! All types are plain immutable data; depth is always a call parameter and
//! is never stored on the section, so property evaluation is deterministic
//! and safe to share across threads.

pub mod error;
pub mod flow;
pub mod section;

// Re-exports
pub use error::{GeometryError, GeometryResult};
pub use flow::FlowDescriptor;
pub use section::ChannelSection;
