//! Normal-depth solver for open-channel uniform flow.
//!
//! This crate finds the depth at which Manning's-equation discharge matches a
//! target discharge for a given cross-section, bed slope, and roughness, then
//! derives velocity and Froude number from the converged depth and classifies
//! the flow regime.
//!
//! The search is a bisection on depth: discharge is strictly monotone
//! increasing in depth for every supported section, so a bracketing interval
//! that straddles the target is guaranteed to converge.

pub mod error;
pub mod manning;
pub mod normal_depth;
pub mod regime;

pub use error::{SolverError, SolverResult};
pub use manning::manning_discharge;
pub use normal_depth::{solve_normal_depth, NormalDepthConfig, NormalDepthSolution};
pub use regime::FlowRegime;
