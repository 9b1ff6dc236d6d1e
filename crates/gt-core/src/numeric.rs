use crate::GtError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Relative-only tolerance, handy for comparing against tabulated data.
    pub const fn rel(rel: Real) -> Self {
        Self { abs: 0.0, rel }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GtError::NonFinite { what, value: v })
    }
}

/// Linear interpolation between `a` and `b` at fraction `t`.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + t * (b - a)
}
