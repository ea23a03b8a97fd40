//! Strength development coefficient beta_cc(t).

use crate::error::ConcreteResult;
use crate::maturity::validate_age;
use cure_core::{Real, ensure_finite};

/// Age at which the standards calibrate f_ck [days].
pub const CALIBRATION_AGE: Real = 28.0;

/// beta_cc(t) = exp(s (1 - sqrt(28 / t'))), t' = min(t, 28).
///
/// 2004, 3.1.2(6) Eq. 3.2. `s` is the cement-class coefficient and `t` the
/// (temperature-adjusted) age in days.
pub fn beta_cc_2004(s: Real, t: Real) -> ConcreteResult<Real> {
    let t = validate_age(t, "equivalent age")?.min(CALIBRATION_AGE);
    let beta = (s * (1.0 - (CALIBRATION_AGE / t).sqrt())).exp();
    Ok(ensure_finite(beta, "beta_cc")?)
}

/// beta_cc(t) = exp(s_C (1 - sqrt(t_ref / t')) sqrt(28 / t_ref)), t' = min(t, t_ref).
///
/// 2023, B.4(1) Eq. B.2. Reduces to the 2004 form for `t_ref = 28`.
pub fn beta_cc_2023(s_c: Real, t: Real, t_ref: Real) -> ConcreteResult<Real> {
    let t_ref = validate_age(t_ref, "reference age")?;
    let t = validate_age(t, "equivalent age")?.min(t_ref);
    let beta = (s_c * (1.0 - (t_ref / t).sqrt()) * (CALIBRATION_AGE / t_ref).sqrt()).exp();
    Ok(ensure_finite(beta, "beta_cc")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConcreteError;

    #[test]
    fn normal_cement_at_seven_days() {
        let beta = beta_cc_2004(0.25, 7.0).unwrap();
        assert!((beta - (-0.25_f64).exp()).abs() < 1e-12);
        assert!((beta - 0.7788).abs() < 1e-4);
    }

    #[test]
    fn unity_at_reference_age() {
        assert_eq!(beta_cc_2004(0.38, 28.0).unwrap(), 1.0);
        assert_eq!(beta_cc_2023(0.5, 28.0, 28.0).unwrap(), 1.0);
        assert_eq!(beta_cc_2023(0.5, 56.0, 56.0).unwrap(), 1.0);
    }

    #[test]
    fn clamped_beyond_reference_age() {
        assert_eq!(beta_cc_2004(0.25, 90.0).unwrap(), 1.0);
        assert_eq!(beta_cc_2023(0.4, 200.0, 91.0).unwrap(), 1.0);
    }

    #[test]
    fn editions_agree_at_28_day_reference() {
        for t in [0.5, 1.0, 3.0, 7.0, 14.0, 27.0] {
            let a = beta_cc_2004(0.25, t).unwrap();
            let b = beta_cc_2023(0.25, t, 28.0).unwrap();
            assert!((a - b).abs() < 1e-12, "t={t}");
        }
    }

    #[test]
    fn longer_reference_age_lowers_early_strength_ratio() {
        let short = beta_cc_2023(0.5, 7.0, 28.0).unwrap();
        let long = beta_cc_2023(0.5, 7.0, 91.0).unwrap();
        assert!(long < short);
    }

    #[test]
    fn non_positive_age_rejected() {
        assert!(matches!(
            beta_cc_2004(0.25, 0.0),
            Err(ConcreteError::InvalidAge { .. })
        ));
        assert!(beta_cc_2023(0.5, -1.0, 28.0).is_err());
        assert!(matches!(
            beta_cc_2023(0.5, 7.0, 0.0),
            Err(ConcreteError::InvalidAge {
                what: "reference age",
                ..
            })
        ));
    }
}
