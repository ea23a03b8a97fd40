//! EN 1992-1-1:2023.

use crate::aging::beta_cc_2023;
use crate::classes::DevelopmentClass;
use crate::error::{ConcreteError, ConcreteResult};
use crate::maturity::{CuringHistory, MaturityClock, validate_age};
use crate::properties::{MODULUS_AGE_EXPONENT_2023, modulus_2023};
use crate::standard::{ConcreteStandard, Edition};
use crate::tables::{EN2023_TABLE, StandardTable};
use cure_core::Real;
use std::ops::RangeInclusive;
use tracing::warn;

/// Reference ages a project may specify, B.4(1) [days].
pub const RECOMMENDED_REFERENCE_AGES: RangeInclusive<Real> = 28.0..=91.0;

/// 2023 edition: development classes CS/CN/CR binned by f_ck, configurable
/// reference age and aggregate coefficient, constant-temperature curing.
#[derive(Debug, Clone, Copy, Default)]
pub struct En2023;

impl ConcreteStandard for En2023 {
    fn edition(&self) -> Edition {
        Edition::En2023
    }

    fn table(&self) -> &'static StandardTable {
        &EN2023_TABLE
    }

    fn default_development_class(&self) -> DevelopmentClass {
        DevelopmentClass::CN
    }

    fn modulus(&self, f_cm: Real, k_e: Real) -> ConcreteResult<Real> {
        modulus_2023(f_cm, k_e)
    }

    fn check_reference_age(&self, t_ref: Real) -> ConcreteResult<Real> {
        let t_ref = validate_age(t_ref, "reference age")?;
        if !RECOMMENDED_REFERENCE_AGES.contains(&t_ref) {
            warn!(t_ref, "reference age outside 28-91 days");
        }
        Ok(t_ref)
    }

    fn development_coefficient(&self, s_c: Real, t: Real, t_ref: Real) -> ConcreteResult<Real> {
        beta_cc_2023(s_c, t, t_ref)
    }

    fn modulus_age_exponent(&self) -> Real {
        MODULUS_AGE_EXPONENT_2023
    }

    fn equivalent_age(&self, clock: &MaturityClock, history: &CuringHistory) -> ConcreteResult<Real> {
        match history {
            CuringHistory::Constant { age, temperature } => clock.equivalent_age(*age, *temperature),
            CuringHistory::Intervals(_) => Err(ConcreteError::UnsupportedCuringHistory {
                edition: Edition::En2023,
            }),
        }
    }
}
