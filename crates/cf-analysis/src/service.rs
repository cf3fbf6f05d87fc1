//! Analysis orchestration: raw input records in, presentation record out.

use crate::types::{CalculationResults, ChannelKind, GeometryData, HydraulicData, ProjectData};
use crate::validate::validate_inputs;
use cf_core::units::UnitProfile;
use cf_geometry::{ChannelSection, FlowDescriptor};
use cf_solver::{solve_normal_depth, NormalDepthConfig, SolverError};
use tracing::{debug, warn};

/// Run a normal-depth analysis for one channel.
///
/// Validates the raw fields, builds the domain objects, invokes the solver,
/// and maps the outcome into `CalculationResults`. Never panics and never
/// returns an error across this boundary: failures come back as
/// `is_valid = false` with a user-facing message.
pub fn calculate(
    project: &ProjectData,
    geometry: &GeometryData,
    hydraulic: &HydraulicData,
) -> CalculationResults {
    if let Err(e) = validate_inputs(geometry, hydraulic) {
        warn!(error = %e, "analysis input rejected");
        return CalculationResults::rejected(e.to_string());
    }

    let Ok(kind) = geometry.channel_type.parse::<ChannelKind>() else {
        warn!(channel_type = %geometry.channel_type, "unrecognized channel type");
        return CalculationResults::rejected("Invalid channel type selected.".to_string());
    };

    let section = build_section(kind, geometry);
    let flow = FlowDescriptor::new(hydraulic.discharge, hydraulic.manning_n);
    let profile = UnitProfile::for_unit_system(project.use_us_customary);

    match solve_normal_depth(
        &section,
        &flow,
        geometry.bed_slope,
        &profile,
        &NormalDepthConfig::default(),
    ) {
        Ok(solution) => {
            debug!(
                normal_depth = solution.normal_depth,
                froude_number = solution.froude_number,
                "analysis complete"
            );
            CalculationResults {
                normal_depth: solution.normal_depth,
                velocity: solution.velocity,
                froude_number: solution.froude_number,
                flow_regime: solution.regime.to_string(),
                is_valid: true,
                error_message: String::new(),
            }
        }
        Err(e @ SolverError::ConvergenceFailed { .. }) => {
            warn!(error = %e, "normal depth solve did not converge");
            CalculationResults::rejected(
                "Calculation failed to converge. Try adjusting input parameters.".to_string(),
            )
        }
        Err(e) => {
            // Field validation should have caught everything else; report
            // whatever slipped through rather than panicking.
            warn!(error = %e, "normal depth solve failed");
            CalculationResults::rejected(format!("Calculation error: {e}"))
        }
    }
}

fn build_section(kind: ChannelKind, geometry: &GeometryData) -> ChannelSection {
    match kind {
        ChannelKind::Rectangular => ChannelSection::Rectangular {
            width: geometry.bottom_width,
        },
        ChannelKind::Trapezoidal => ChannelSection::Trapezoidal {
            bottom_width: geometry.bottom_width,
            side_slope: geometry.side_slope,
        },
        ChannelKind::Triangular => ChannelSection::Triangular {
            side_slope: geometry.side_slope,
        },
    }
}
