//! Manning's-equation discharge evaluation.

use crate::error::{SolverError, SolverResult};
use cf_core::numeric::{ensure_finite, Real};
use cf_core::units::UnitProfile;
use cf_geometry::{ChannelSection, FlowDescriptor};

/// Discharge predicted by Manning's equation at the given depth.
///
/// Q = (k/n) · A · R^(2/3) · √S, where k is the unit-system Manning
/// coefficient, A the flow area, R the hydraulic radius, and S the bed slope.
pub fn manning_discharge(
    section: &ChannelSection,
    depth: Real,
    flow: &FlowDescriptor,
    bed_slope: Real,
    profile: &UnitProfile,
) -> SolverResult<Real> {
    let area = section.area(depth);
    let hydraulic_radius = section.hydraulic_radius(depth)?;
    let q = (profile.manning_coefficient / flow.manning_n())
        * area
        * hydraulic_radius.powf(2.0 / 3.0)
        * bed_slope.sqrt();
    ensure_finite(q, "Manning discharge").map_err(|_| SolverError::Numeric {
        what: "Manning discharge",
    })?;
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_core::units::UnitProfile;

    #[test]
    fn rectangular_discharge_hand_check() {
        // w=10, d=2: A=20, P=14, R=10/7
        let section = ChannelSection::Rectangular { width: 10.0 };
        let flow = FlowDescriptor::new(50.0, 0.013);
        let profile = UnitProfile::for_unit_system(false);

        let q = manning_discharge(&section, 2.0, &flow, 0.001, &profile).unwrap();
        let expected = (1.0 / 0.013) * 20.0 * (10.0_f64 / 7.0).powf(2.0 / 3.0) * 0.001_f64.sqrt();
        assert!((q - expected).abs() < 1e-9);
    }

    #[test]
    fn us_customary_coefficient_scales_discharge() {
        let section = ChannelSection::Rectangular { width: 10.0 };
        let flow = FlowDescriptor::new(50.0, 0.013);

        let q_si = manning_discharge(
            &section,
            2.0,
            &flow,
            0.001,
            &UnitProfile::for_unit_system(false),
        )
        .unwrap();
        let q_us = manning_discharge(
            &section,
            2.0,
            &flow,
            0.001,
            &UnitProfile::for_unit_system(true),
        )
        .unwrap();

        assert!((q_us / q_si - 1.49).abs() < 1e-9);
    }

    #[test]
    fn overflowing_depth_reports_numeric_error() {
        // Area overflows to infinity, the hydraulic radius becomes NaN, and
        // the guard catches it before it can reach a bisection bracket.
        let section = ChannelSection::Rectangular { width: 10.0 };
        let flow = FlowDescriptor::new(50.0, 0.013);
        let profile = UnitProfile::for_unit_system(false);

        let err = manning_discharge(&section, 1e308, &flow, 0.001, &profile).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }

    #[test]
    fn triangular_at_zero_depth_is_degenerate() {
        let section = ChannelSection::Triangular { side_slope: 2.0 };
        let flow = FlowDescriptor::new(50.0, 0.013);
        let profile = UnitProfile::for_unit_system(false);

        assert!(manning_discharge(&section, 0.0, &flow, 0.001, &profile).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use cf_core::units::UnitProfile;
    use proptest::prelude::*;

    fn arb_section() -> impl Strategy<Value = ChannelSection> {
        prop_oneof![
            (0.1_f64..50.0).prop_map(|width| ChannelSection::Rectangular { width }),
            (0.1_f64..50.0, 0.1_f64..10.0).prop_map(|(bottom_width, side_slope)| {
                ChannelSection::Trapezoidal {
                    bottom_width,
                    side_slope,
                }
            }),
            (0.1_f64..10.0).prop_map(|side_slope| ChannelSection::Triangular { side_slope }),
        ]
    }

    proptest! {
        // Bracketing precondition for the bisection search: deeper water
        // always carries more flow.
        #[test]
        fn discharge_is_strictly_increasing_in_depth(
            section in arb_section(),
            d in 0.001_f64..100.0,
            step in 0.01_f64..20.0,
            slope in 0.0001_f64..0.1,
            n in 0.01_f64..0.2,
        ) {
            let flow = FlowDescriptor::new(1.0, n);
            let profile = UnitProfile::for_unit_system(false);
            let q_lo = manning_discharge(&section, d, &flow, slope, &profile).unwrap();
            let q_hi = manning_discharge(&section, d + step, &flow, slope, &profile).unwrap();
            prop_assert!(q_hi > q_lo);
        }
    }
}
