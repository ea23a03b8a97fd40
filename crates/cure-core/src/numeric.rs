use crate::CoreError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute and relative tolerance for comparing derived values.
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

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// `v > 0` and finite. NaN is never positive.
pub fn is_positive_finite(v: Real) -> bool {
    v.is_finite() && v > 0.0
}

/// `lo < v <= hi`. NaN is never inside.
pub fn in_half_open(v: Real, lo: Real, hi: Real) -> bool {
    v > lo && v <= hi
}
