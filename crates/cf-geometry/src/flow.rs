//! Flow descriptor: discharge paired with Manning roughness.

use cf_core::numeric::Real;

/// Target discharge and Manning's roughness coefficient for one analysis.
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowDescriptor {
    discharge: Real,
    manning_n: Real,
}

impl FlowDescriptor {
    pub fn new(discharge: Real, manning_n: Real) -> Self {
        Self {
            discharge,
            manning_n,
        }
    }

    pub fn discharge(&self) -> Real {
        self.discharge
    }

    pub fn manning_n(&self) -> Real {
        self.manning_n
    }

    /// True iff both discharge and roughness are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.discharge > 0.0 && self.manning_n > 0.0
    }
}
