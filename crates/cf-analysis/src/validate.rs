//! Field validation for the analysis inputs.
//!
//! Every rule is checked before any domain object is constructed, and each
//! failure carries the exact user-facing message the UI displays. Shape rules
//! are keyed off the raw channel-type tag; an unrecognized tag skips them and
//! is rejected later when the section is constructed.

use crate::types::{GeometryData, HydraulicData};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Bed slope must be greater than zero.")]
    NonPositiveBedSlope,

    #[error("Bed slope must be less than 1.0 (invalid slope).")]
    ExcessiveBedSlope,

    #[error("Discharge must be greater than zero.")]
    NonPositiveDischarge,

    #[error("Manning's n must be between 0 and 0.2.")]
    ManningOutOfRange,

    #[error("Bottom width must be greater than zero.")]
    NonPositiveBottomWidth,

    #[error("Side slope must be greater than zero.")]
    NonPositiveSideSlope,
}

/// Check every input field against its documented range.
pub fn validate_inputs(
    geometry: &GeometryData,
    hydraulic: &HydraulicData,
) -> Result<(), ValidationError> {
    if geometry.bed_slope <= 0.0 {
        return Err(ValidationError::NonPositiveBedSlope);
    }
    if geometry.bed_slope > 1.0 {
        return Err(ValidationError::ExcessiveBedSlope);
    }

    if hydraulic.discharge <= 0.0 {
        return Err(ValidationError::NonPositiveDischarge);
    }
    if hydraulic.manning_n <= 0.0 || hydraulic.manning_n > 0.2 {
        return Err(ValidationError::ManningOutOfRange);
    }

    match geometry.channel_type.as_str() {
        "Rectangular" => {
            if geometry.bottom_width <= 0.0 {
                return Err(ValidationError::NonPositiveBottomWidth);
            }
        }
        "Trapezoidal" => {
            if geometry.bottom_width <= 0.0 {
                return Err(ValidationError::NonPositiveBottomWidth);
            }
            if geometry.side_slope <= 0.0 {
                return Err(ValidationError::NonPositiveSideSlope);
            }
        }
        "Triangular" => {
            if geometry.side_slope <= 0.0 {
                return Err(ValidationError::NonPositiveSideSlope);
            }
        }
        _ => {}
    }

    Ok(())
}
