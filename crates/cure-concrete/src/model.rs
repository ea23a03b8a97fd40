//! Configured concrete with derived properties.

use crate::error::ConcreteResult;
use crate::maturity::CuringHistory;
use crate::properties;
use crate::specification::ConcreteSpecification;
use crate::standard::{ConcreteStandard, Edition};
use cure_core::{Real, Samples};
use tracing::debug;

/// Equivalent ages below this are outside the range where the strength
/// classes are verified [days].
pub const MIN_VERIFIED_EQUIVALENT_AGE: Real = 3.0;

/// A concrete evaluated against one edition of the standard.
///
/// The edition is fixed at construction; the specification is public and may
/// be changed at any time. Every accessor recomputes from the current
/// specification, nothing is cached.
///
/// # Example
///
/// ```
/// use cure_concrete::{ConcreteModel, Edition, StrengthClass};
///
/// let mut model = ConcreteModel::new(Edition::En2023);
/// model.spec.strength_class = StrengthClass::C40_50;
/// assert_eq!(model.mean_strength().unwrap(), 48.0);
///
/// model.spec.current_age = vec![3.0, 7.0, 28.0].into();
/// let f_ck_t = model.age_adjusted_characteristic_strength().unwrap();
/// assert_eq!(f_ck_t.values().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ConcreteModel {
    standard: &'static dyn ConcreteStandard,
    pub spec: ConcreteSpecification,
}

/// Snapshot of age-dependent properties for a single curing history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgedProperties {
    /// Temperature-adjusted age [days]
    pub equivalent_age: Real,
    /// beta_cc
    pub development_coefficient: Real,
    /// f_cm(t) [MPa]
    pub mean_strength: Real,
    /// E_cm(t) [MPa]
    pub modulus: Real,
    /// f_ck(t) [MPa]
    pub characteristic_strength: Real,
}

impl ConcreteModel {
    /// Model with the edition's default specification.
    pub fn new(edition: Edition) -> Self {
        Self::with_specification(edition, ConcreteSpecification::for_edition(edition))
    }

    pub fn with_specification(edition: Edition, spec: ConcreteSpecification) -> Self {
        Self {
            standard: edition.standard(),
            spec,
        }
    }

    pub fn edition(&self) -> Edition {
        self.standard.edition()
    }

    pub fn standard(&self) -> &'static dyn ConcreteStandard {
        self.standard
    }

    /// Copy of the current inputs, e.g. to hand to another thread.
    pub fn snapshot(&self) -> ConcreteSpecification {
        self.spec.clone()
    }

    /// f_ck [MPa]
    pub fn characteristic_strength(&self) -> ConcreteResult<Real> {
        self.standard.characteristic_strength(self.spec.strength_class)
    }

    /// f_cm [MPa]
    pub fn mean_strength(&self) -> ConcreteResult<Real> {
        Ok(self.standard.mean_strength(self.characteristic_strength()?))
    }

    /// E_cm [MPa] at the reference age.
    pub fn modulus(&self) -> ConcreteResult<Real> {
        self.standard
            .modulus(self.mean_strength()?, self.spec.aggregate_coefficient)
    }

    /// s (2004) or s_C (2023).
    pub fn development_class_coefficient(&self) -> ConcreteResult<Real> {
        self.standard.development_class_coefficient(
            self.spec.development_class,
            self.characteristic_strength()?,
        )
    }

    /// Validated reference age [days].
    pub fn reference_age(&self) -> ConcreteResult<Real> {
        self.standard.check_reference_age(self.spec.reference_age)
    }

    /// Temperature-adjusted age [days] for each (age, temperature) pair.
    pub fn equivalent_age(&self) -> ConcreteResult<Samples> {
        let clock = self.spec.clock();
        let t_t = self
            .spec
            .current_age
            .try_zip_with(&self.spec.curing_temperature, |age, temperature| {
                self.standard
                    .equivalent_age(&clock, &CuringHistory::Constant { age, temperature })
            })?;
        if t_t.values().iter().any(|t| *t < MIN_VERIFIED_EQUIVALENT_AGE) {
            debug!(
                edition = %self.edition(),
                "equivalent age below 3 days, strength development is extrapolated"
            );
        }
        Ok(t_t)
    }

    /// beta_cc at the equivalent age.
    pub fn development_coefficient(&self) -> ConcreteResult<Samples> {
        let t_ref = self.reference_age()?;
        let s = self.development_class_coefficient()?;
        let t_t = self.equivalent_age()?;
        t_t.try_map(|t| self.standard.development_coefficient(s, t, t_ref))
    }

    /// f_cm(t) [MPa]
    pub fn age_adjusted_mean_strength(&self) -> ConcreteResult<Samples> {
        let f_cm = self.mean_strength()?;
        Ok(self
            .development_coefficient()?
            .map(|beta| properties::age_adjusted_mean_strength(beta, f_cm)))
    }

    /// E_cm(t) [MPa]
    pub fn age_adjusted_modulus(&self) -> ConcreteResult<Samples> {
        let e_cm = self.modulus()?;
        Ok(self
            .development_coefficient()?
            .map(|beta| self.standard.age_adjusted_modulus(beta, e_cm)))
    }

    /// f_ck(t) [MPa]
    pub fn age_adjusted_characteristic_strength(&self) -> ConcreteResult<Samples> {
        Ok(self
            .age_adjusted_mean_strength()?
            .map(properties::age_adjusted_characteristic_strength))
    }

    /// Age-dependent properties for an explicit curing history instead of the
    /// configured age and temperature.
    pub fn properties_for(&self, history: &CuringHistory) -> ConcreteResult<AgedProperties> {
        let clock = self.spec.clock();
        let equivalent_age = self.standard.equivalent_age(&clock, history)?;
        let t_ref = self.reference_age()?;
        let s = self.development_class_coefficient()?;
        let beta = self
            .standard
            .development_coefficient(s, equivalent_age, t_ref)?;
        let f_cm_t = properties::age_adjusted_mean_strength(beta, self.mean_strength()?);
        debug!(equivalent_age, beta, "evaluated curing history");
        Ok(AgedProperties {
            equivalent_age,
            development_coefficient: beta,
            mean_strength: f_cm_t,
            modulus: self.standard.age_adjusted_modulus(beta, self.modulus()?),
            characteristic_strength: properties::age_adjusted_characteristic_strength(f_cm_t),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{DevelopmentClass, StrengthClass};
    use crate::error::ConcreteError;
    use crate::maturity::CuringInterval;

    #[test]
    fn reference_values_2023() {
        let model = ConcreteModel::new(Edition::En2023);
        assert_eq!(model.characteristic_strength().unwrap(), 30.0);
        assert_eq!(model.mean_strength().unwrap(), 38.0);
        assert!((model.modulus().unwrap() - 9_500.0 * 38.0_f64.cbrt()).abs() < 1e-9);
        assert_eq!(model.development_coefficient().unwrap(), Samples::Scalar(1.0));
    }

    #[test]
    fn mutation_is_observed_immediately() {
        let mut model = ConcreteModel::new(Edition::En2023);
        let before = model.age_adjusted_mean_strength().unwrap();
        model.spec.current_age = 7.0.into();
        let after = model.age_adjusted_mean_strength().unwrap();
        assert!(after.as_scalar().unwrap() < before.as_scalar().unwrap());

        model.spec.strength_class = StrengthClass::C50_60;
        assert_eq!(model.characteristic_strength().unwrap(), 50.0);
    }

    #[test]
    fn series_age_gives_series_output() {
        let mut model = ConcreteModel::new(Edition::En2004);
        model.spec.current_age = vec![1.0, 7.0, 28.0, 90.0].into();
        let beta = model.development_coefficient().unwrap();
        let values = beta.values();
        assert_eq!(values.len(), 4);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[3], 1.0);
    }

    #[test]
    fn first_invalid_element_fails_whole_series() {
        let mut model = ConcreteModel::new(Edition::En2023);
        model.spec.curing_temperature = vec![20.0, 85.0].into();
        model.spec.current_age = vec![7.0, 7.0].into();
        assert_eq!(
            model.equivalent_age().unwrap_err(),
            ConcreteError::InvalidTemperatureRange { value: 85.0 }
        );
    }

    #[test]
    fn wrong_development_class_for_edition() {
        let mut model = ConcreteModel::new(Edition::En2004);
        model.spec.development_class = DevelopmentClass::CR;
        assert!(matches!(
            model.development_coefficient(),
            Err(ConcreteError::UnknownDevelopmentClass { .. })
        ));
        // Reference-age properties do not need the development class
        assert!(model.modulus().is_ok());
    }

    #[test]
    fn history_evaluation_2004() {
        let model = ConcreteModel::new(Edition::En2004);
        let history = CuringHistory::Intervals(vec![
            CuringInterval::new(3.0, 5.0),
            CuringInterval::new(4.0, 20.0),
        ]);
        let props = model.properties_for(&history).unwrap();
        assert!(props.equivalent_age < 7.0);
        assert!(props.development_coefficient < 1.0);
        assert!(
            (props.characteristic_strength - (props.mean_strength - 8.0)).abs() < 1e-12
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let mut model = ConcreteModel::new(Edition::En2023);
        let snap = model.snapshot();
        model.spec.reference_age = 56.0;
        assert_eq!(snap.reference_age, 28.0);
        let other = ConcreteModel::with_specification(Edition::En2023, snap);
        assert_eq!(other.reference_age().unwrap(), 28.0);
    }
}
