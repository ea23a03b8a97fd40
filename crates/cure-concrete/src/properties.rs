//! Strength and stiffness formulas.
//!
//! Free functions so that callers can evaluate a single clause without a
//! configured model. All stresses in MPa.

use crate::error::{ConcreteError, ConcreteResult};
use cure_core::Real;
use std::ops::RangeInclusive;

/// f_cm - f_ck [MPa]
pub const MEAN_STRENGTH_MARGIN: Real = 8.0;

/// k_E for quartzite aggregate.
pub const DEFAULT_AGGREGATE_COEFFICIENT: Real = 9_500.0;

/// Admissible k_E depending on aggregate type.
pub const AGGREGATE_COEFFICIENT_RANGE: RangeInclusive<Real> = 5_000.0..=13_000.0;

pub const MODULUS_AGE_EXPONENT_2004: Real = 0.3;
pub const MODULUS_AGE_EXPONENT_2023: Real = 1.0 / 3.0;

/// f_cm = f_ck + 8 (2004 Table 3.1, 2023 5.1.3(3)).
pub fn mean_strength(f_ck: Real) -> Real {
    f_ck + MEAN_STRENGTH_MARGIN
}

/// Secant modulus E_cm = 22000 (f_cm / 10)^0.3 (2004 Table 3.1).
pub fn modulus_2004(f_cm: Real) -> Real {
    22_000.0 * (f_cm / 10.0).powf(0.3)
}

pub fn validate_aggregate_coefficient(k_e: Real) -> ConcreteResult<Real> {
    if AGGREGATE_COEFFICIENT_RANGE.contains(&k_e) {
        Ok(k_e)
    } else {
        Err(ConcreteError::InvalidAggregateCoefficient { value: k_e })
    }
}

/// Secant modulus E_cm = k_E f_cm^(1/3) (2023 5.1.4(2)).
pub fn modulus_2023(f_cm: Real, k_e: Real) -> ConcreteResult<Real> {
    let k_e = validate_aggregate_coefficient(k_e)?;
    Ok(k_e * f_cm.cbrt())
}

/// f_cm(t) = beta_cc(t) f_cm
pub fn age_adjusted_mean_strength(beta_cc: Real, f_cm: Real) -> Real {
    beta_cc * f_cm
}

/// E_cm(t) = beta_cc(t)^n E_cm, with n = 0.3 (2004) or 1/3 (2023).
pub fn age_adjusted_modulus(beta_cc: Real, e_cm: Real, exponent: Real) -> Real {
    beta_cc.powf(exponent) * e_cm
}

/// f_ck(t) = f_cm(t) - 8
///
/// The 2023 edition does not state this relation explicitly; it is kept for
/// both editions so that f_ck(t_ref) = f_ck.
pub fn age_adjusted_characteristic_strength(f_cm_t: Real) -> Real {
    f_cm_t - MEAN_STRENGTH_MARGIN
}
