// cf-core/src/units.rs

use crate::numeric::Real;

/// Gravitational acceleration, SI (m/s²)
pub const GRAVITY_SI: Real = 9.81;
/// Gravitational acceleration, US customary (ft/s²)
pub const GRAVITY_US_CUSTOMARY: Real = 32.2;

/// Manning's equation unit coefficient, SI
pub const MANNING_COEFFICIENT_SI: Real = 1.0;
/// Manning's equation unit coefficient, US customary
pub const MANNING_COEFFICIENT_US: Real = 1.49;

/// Unit system selection, chosen once per analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    Si,
    UsCustomary,
}

impl UnitSystem {
    /// Select the system from the project-level "use US customary" flag.
    pub fn from_flag(use_us_customary: bool) -> Self {
        if use_us_customary {
            UnitSystem::UsCustomary
        } else {
            UnitSystem::Si
        }
    }

    /// Physical constants for this system, threaded explicitly through the
    /// solver rather than read from global scope.
    pub fn profile(self) -> UnitProfile {
        match self {
            UnitSystem::Si => UnitProfile {
                gravity: GRAVITY_SI,
                manning_coefficient: MANNING_COEFFICIENT_SI,
            },
            UnitSystem::UsCustomary => UnitProfile {
                gravity: GRAVITY_US_CUSTOMARY,
                manning_coefficient: MANNING_COEFFICIENT_US,
            },
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UnitSystem::Si => "SI Metric",
            UnitSystem::UsCustomary => "US Customary",
        }
    }

    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Si => "m",
            UnitSystem::UsCustomary => "ft",
        }
    }

    pub fn velocity_label(self) -> &'static str {
        match self {
            UnitSystem::Si => "m/s",
            UnitSystem::UsCustomary => "ft/s",
        }
    }

    pub fn discharge_label(self) -> &'static str {
        match self {
            UnitSystem::Si => "m³/s",
            UnitSystem::UsCustomary => "cfs",
        }
    }

    pub fn area_label(self) -> &'static str {
        match self {
            UnitSystem::Si => "m²",
            UnitSystem::UsCustomary => "ft²",
        }
    }
}

/// Gravitational acceleration and Manning coefficient for one unit system.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitProfile {
    pub gravity: Real,
    pub manning_coefficient: Real,
}

impl UnitProfile {
    pub fn for_unit_system(use_us_customary: bool) -> Self {
        UnitSystem::from_flag(use_us_customary).profile()
    }
}
