//! Bisection search for the normal depth.

use crate::error::{SolverError, SolverResult};
use crate::manning::manning_discharge;
use crate::regime::FlowRegime;
use cf_core::numeric::Real;
use cf_core::units::UnitProfile;
use cf_geometry::{ChannelSection, FlowDescriptor};
use tracing::{debug, warn};

/// Normal-depth solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NormalDepthConfig {
    /// Lower depth bracket (length units). Kept above zero so the hydraulic
    /// radius is always defined inside the search.
    pub min_depth: Real,
    /// Upper depth bracket (length units). The wide default covers
    /// high-discharge, flat-slope channels at no extra iteration cost.
    pub max_depth: Real,
    /// Convergence tolerance on discharge (discharge units)
    pub discharge_tolerance: Real,
    /// Maximum bisection iterations
    pub max_iterations: usize,
}

impl Default for NormalDepthConfig {
    fn default() -> Self {
        Self {
            min_depth: 0.001,
            max_depth: 1000.0,
            discharge_tolerance: 0.001,
            max_iterations: 100,
        }
    }
}

/// Converged normal-depth solution.
///
/// Created per solve call, immutable, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDepthSolution {
    pub normal_depth: Real,
    pub velocity: Real,
    pub froude_number: Real,
    pub regime: FlowRegime,
}

/// Find the depth at which Manning's-equation discharge matches the target.
///
/// Bisection on depth: discharge is strictly monotone increasing in depth for
/// every supported section, so halving the bracket toward the target
/// converges. On convergence, velocity and Froude number are derived from
/// the final depth and the regime is classified.
///
/// Nothing shared with the caller is mutated; the section and flow are read
/// only.
pub fn solve_normal_depth(
    section: &ChannelSection,
    flow: &FlowDescriptor,
    bed_slope: Real,
    profile: &UnitProfile,
    config: &NormalDepthConfig,
) -> SolverResult<NormalDepthSolution> {
    if !flow.is_valid() {
        return Err(SolverError::InvalidFlow);
    }
    if bed_slope <= 0.0 {
        return Err(SolverError::InvalidSlope { value: bed_slope });
    }
    if !section.is_valid() {
        return Err(SolverError::InvalidSection);
    }

    let target = flow.discharge();
    let mut min_depth = config.min_depth;
    let mut max_depth = config.max_depth;

    for iteration in 0..config.max_iterations {
        let mid_depth = (min_depth + max_depth) / 2.0;
        let discharge = manning_discharge(section, mid_depth, flow, bed_slope, profile)?;

        if (discharge - target).abs() < config.discharge_tolerance {
            debug!(
                iterations = iteration + 1,
                normal_depth = mid_depth,
                "normal depth converged"
            );
            return Ok(post_process(section, mid_depth, target, profile));
        }

        if discharge < target {
            min_depth = mid_depth;
        } else {
            max_depth = mid_depth;
        }
    }

    warn!(
        max_iterations = config.max_iterations,
        target_discharge = target,
        "normal depth search exhausted its iteration budget"
    );
    Err(SolverError::ConvergenceFailed {
        what: "bisection exhausted its iteration budget",
    })
}

fn post_process(
    section: &ChannelSection,
    normal_depth: Real,
    target_discharge: Real,
    profile: &UnitProfile,
) -> NormalDepthSolution {
    let area = section.area(normal_depth);
    let velocity = target_discharge / area;

    let hydraulic_depth = area / section.top_width(normal_depth);
    let froude_number = velocity / (profile.gravity * hydraulic_depth).sqrt();

    NormalDepthSolution {
        normal_depth,
        velocity,
        froude_number,
        regime: FlowRegime::classify(froude_number),
    }
}
