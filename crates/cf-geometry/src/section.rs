//! Channel cross-section shapes and their geometric properties.

use crate::error::{GeometryError, GeometryResult};
use cf_core::numeric::Real;

/// An open-channel cross-section shape.
///
/// Each variant carries only its shape parameters; the flow depth is supplied
/// per evaluation call. Properties are deterministic functions of shape and
/// depth, suitable for root-finding loops and parallel evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelSection {
    /// Vertical walls, flat bottom.
    Rectangular { width: Real },
    /// Flat bottom with sloped banks (side slope is horizontal run per unit
    /// rise).
    Trapezoidal { bottom_width: Real, side_slope: Real },
    /// V-shaped section, no bottom width.
    Triangular { side_slope: Real },
}

impl ChannelSection {
    /// Flow area at the given depth.
    pub fn area(&self, depth: Real) -> Real {
        match *self {
            ChannelSection::Rectangular { width } => width * depth,
            ChannelSection::Trapezoidal {
                bottom_width,
                side_slope,
            } => (bottom_width + side_slope * depth) * depth,
            ChannelSection::Triangular { side_slope } => side_slope * depth * depth,
        }
    }

    /// Length of the section boundary in contact with water at the given
    /// depth.
    pub fn wetted_perimeter(&self, depth: Real) -> Real {
        match *self {
            ChannelSection::Rectangular { width } => width + 2.0 * depth,
            ChannelSection::Trapezoidal {
                bottom_width,
                side_slope,
            } => bottom_width + 2.0 * depth * (side_slope * side_slope + 1.0).sqrt(),
            ChannelSection::Triangular { side_slope } => {
                2.0 * depth * (side_slope * side_slope + 1.0).sqrt()
            }
        }
    }

    /// Water-surface width at the given depth.
    pub fn top_width(&self, depth: Real) -> Real {
        match *self {
            ChannelSection::Rectangular { width } => width,
            ChannelSection::Trapezoidal {
                bottom_width,
                side_slope,
            } => bottom_width + 2.0 * side_slope * depth,
            ChannelSection::Triangular { side_slope } => 2.0 * side_slope * depth,
        }
    }

    /// Hydraulic radius: area divided by wetted perimeter.
    ///
    /// Errors when the wetted perimeter is zero (depth at zero for a
    /// triangular section, or a degenerate shape), since the ratio is
    /// undefined there.
    pub fn hydraulic_radius(&self, depth: Real) -> GeometryResult<Real> {
        let perimeter = self.wetted_perimeter(depth);
        if perimeter == 0.0 {
            return Err(GeometryError::DegenerateSection {
                what: "wetted perimeter is zero",
            });
        }
        Ok(self.area(depth) / perimeter)
    }

    /// True iff every shape parameter is strictly positive.
    pub fn is_valid(&self) -> bool {
        match *self {
            ChannelSection::Rectangular { width } => width > 0.0,
            ChannelSection::Trapezoidal {
                bottom_width,
                side_slope,
            } => bottom_width > 0.0 && side_slope > 0.0,
            ChannelSection::Triangular { side_slope } => side_slope > 0.0,
        }
    }
}
