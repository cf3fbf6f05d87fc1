//! Boundary records exchanged with frontends.

use cf_core::numeric::Real;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Project-level settings gathered by the first wizard stage.
///
/// The core reads only the unit-system flag; name and location ride along for
/// display and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectData {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub location: String,
    pub use_us_customary: bool,
}

/// Channel geometry as entered in the UI.
///
/// `channel_type` stays a string tag here: it is whatever the selection
/// widget produced, and parsing it is the service's job so an unrecognized
/// tag surfaces as a rejected calculation rather than a deserialization
/// failure. `length` is carried for the visualization layer and does not
/// enter the normal-depth computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryData {
    pub channel_type: String,
    #[serde(default)]
    pub bottom_width: Real,
    #[serde(default)]
    pub side_slope: Real,
    #[serde(default)]
    pub length: Real,
    #[serde(default)]
    pub bed_slope: Real,
}

/// Hydraulic parameters as entered in the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydraulicData {
    pub discharge: Real,
    pub manning_n: Real,
}

/// Recognized channel cross-section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelKind {
    Rectangular,
    Trapezoidal,
    Triangular,
}

impl FromStr for ChannelKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rectangular" => Ok(ChannelKind::Rectangular),
            "Trapezoidal" => Ok(ChannelKind::Trapezoidal),
            "Triangular" => Ok(ChannelKind::Triangular),
            _ => Err(()),
        }
    }
}

/// Presentation-ready analysis outcome.
///
/// Always well formed: failed analyses carry `is_valid = false` and a
/// user-facing `error_message`, with the numeric fields zeroed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationResults {
    pub normal_depth: Real,
    pub velocity: Real,
    pub froude_number: Real,
    pub flow_regime: String,
    pub is_valid: bool,
    pub error_message: String,
}

impl CalculationResults {
    /// Result record for a rejected or failed analysis.
    pub(crate) fn rejected(error_message: String) -> Self {
        Self {
            is_valid: false,
            error_message,
            ..Self::default()
        }
    }
}
