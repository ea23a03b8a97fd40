//! Mutable inputs of a concrete model.

use crate::classes::{DevelopmentClass, StrengthClass};
use crate::maturity::MaturityClock;
use crate::properties::DEFAULT_AGGREGATE_COEFFICIENT;
use crate::standard::Edition;
use cure_core::{Real, Samples};

/// Configuration of a concrete: what it is and how it has been cured.
///
/// Holds inputs only. Derived values are never stored here, so fields may be
/// reassigned freely between reads of a [`ConcreteModel`](crate::ConcreteModel).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConcreteSpecification {
    pub strength_class: StrengthClass,
    pub development_class: DevelopmentClass,
    /// Age at which f_ck is determined [days]
    pub reference_age: Real,
    /// Real age of the concrete [days]
    pub current_age: Samples,
    /// Curing temperature [°C]
    pub curing_temperature: Samples,
    /// k_E (2023 only)
    pub aggregate_coefficient: Real,
    pub use_linear_activation_energy: bool,
}

impl Default for ConcreteSpecification {
    fn default() -> Self {
        Self {
            strength_class: StrengthClass::C30_37,
            development_class: DevelopmentClass::CN,
            reference_age: 28.0,
            current_age: Samples::Scalar(28.0),
            curing_temperature: Samples::Scalar(20.0),
            aggregate_coefficient: DEFAULT_AGGREGATE_COEFFICIENT,
            use_linear_activation_energy: true,
        }
    }
}

impl ConcreteSpecification {
    /// Defaults with the edition's default development class.
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            development_class: edition.standard().default_development_class(),
            ..Self::default()
        }
    }

    pub fn with_strength_class(mut self, class: StrengthClass) -> Self {
        self.strength_class = class;
        self
    }

    pub fn with_development_class(mut self, class: DevelopmentClass) -> Self {
        self.development_class = class;
        self
    }

    pub fn with_age(mut self, age: impl Into<Samples>) -> Self {
        self.current_age = age.into();
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<Samples>) -> Self {
        self.curing_temperature = temperature.into();
        self
    }

    pub fn clock(&self) -> MaturityClock {
        MaturityClock::new(self.use_linear_activation_energy)
    }
}
