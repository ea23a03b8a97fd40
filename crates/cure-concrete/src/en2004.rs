//! EN 1992-1-1:2004.

use crate::aging::{CALIBRATION_AGE, beta_cc_2004};
use crate::classes::DevelopmentClass;
use crate::error::{ConcreteError, ConcreteResult};
use crate::maturity::{CuringHistory, MaturityClock};
use crate::properties::{MODULUS_AGE_EXPONENT_2004, modulus_2004};
use crate::standard::{ConcreteStandard, Edition};
use crate::tables::{EN2004_TABLE, StandardTable};
use cure_core::Real;

/// 2004 edition: cement classes S/N/R, 28-day calibration, interval curing
/// histories.
#[derive(Debug, Clone, Copy, Default)]
pub struct En2004;

impl ConcreteStandard for En2004 {
    fn edition(&self) -> Edition {
        Edition::En2004
    }

    fn table(&self) -> &'static StandardTable {
        &EN2004_TABLE
    }

    fn default_development_class(&self) -> DevelopmentClass {
        DevelopmentClass::N
    }

    fn modulus(&self, f_cm: Real, _k_e: Real) -> ConcreteResult<Real> {
        Ok(modulus_2004(f_cm))
    }

    fn check_reference_age(&self, t_ref: Real) -> ConcreteResult<Real> {
        // f_ck is only defined at 28 days in this edition
        if t_ref == CALIBRATION_AGE {
            Ok(t_ref)
        } else {
            Err(ConcreteError::UnsupportedReferenceAge {
                edition: Edition::En2004,
                value: t_ref,
            })
        }
    }

    fn development_coefficient(&self, s: Real, t: Real, _t_ref: Real) -> ConcreteResult<Real> {
        beta_cc_2004(s, t)
    }

    fn modulus_age_exponent(&self) -> Real {
        MODULUS_AGE_EXPONENT_2004
    }

    fn equivalent_age(&self, clock: &MaturityClock, history: &CuringHistory) -> ConcreteResult<Real> {
        clock.equivalent_age_of(history)
    }
}
