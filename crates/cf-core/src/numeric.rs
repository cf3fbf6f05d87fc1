use crate::error::{CoreError, CoreResult};

/// Floating point type used throughout the system
pub type Real = f64;

/// Comparison band for hydraulic quantities.
///
/// Depths and discharges span orders of magnitude between unit systems, so a
/// comparison carries an absolute floor plus a relative term for large
/// values.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Band for discharge comparisons: the solver's absolute convergence
    /// tolerance, widened proportionally for very large flows.
    pub fn discharge() -> Self {
        Self {
            abs: 1e-3,
            rel: 1e-9,
        }
    }

    /// Tight band for closed-form geometry identities.
    pub fn exact() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-12,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Reject NaN and infinities before they poison a bisection bracket.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
