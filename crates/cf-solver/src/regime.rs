//! Flow-regime classification from the Froude number.

use cf_core::numeric::Real;
use std::fmt;

/// Flow regime of an open-channel flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowRegime {
    Subcritical,
    Critical,
    Supercritical,
}

impl FlowRegime {
    /// Classify a Froude number.
    ///
    /// The 0.99–1.01 band is treated as critical: a dead zone around the
    /// theoretical value of 1.0 that absorbs floating-point and
    /// discretization noise instead of flipping the label.
    pub fn classify(froude: Real) -> Self {
        if froude < 0.99 {
            FlowRegime::Subcritical
        } else if froude > 1.01 {
            FlowRegime::Supercritical
        } else {
            FlowRegime::Critical
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowRegime::Subcritical => "Subcritical",
            FlowRegime::Critical => "Critical",
            FlowRegime::Supercritical => "Supercritical",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(FlowRegime::classify(0.70), FlowRegime::Subcritical);
        assert_eq!(FlowRegime::classify(0.989), FlowRegime::Subcritical);
        assert_eq!(FlowRegime::classify(0.99), FlowRegime::Critical);
        assert_eq!(FlowRegime::classify(1.0), FlowRegime::Critical);
        assert_eq!(FlowRegime::classify(1.01), FlowRegime::Critical);
        assert_eq!(FlowRegime::classify(1.011), FlowRegime::Supercritical);
        assert_eq!(FlowRegime::classify(1.3), FlowRegime::Supercritical);
    }

    #[test]
    fn display_strings() {
        assert_eq!(FlowRegime::Subcritical.to_string(), "Subcritical");
        assert_eq!(FlowRegime::Critical.to_string(), "Critical");
        assert_eq!(FlowRegime::Supercritical.to_string(), "Supercritical");
    }
}
