//! Typed, immutable snapshot of a model's outputs.

use crate::classes::{DevelopmentClass, StrengthClass};
use crate::error::ConcreteResult;
use crate::model::ConcreteModel;
use crate::standard::Edition;
use cure_core::{Pressure, Ratio, Temperature, Time, celsius, days, mpa, unitless};

/// Properties at one (age, temperature) point.
#[derive(Debug, Clone, PartialEq)]
pub struct AgedRow {
    pub age: Time,
    pub curing_temperature: Temperature,
    pub equivalent_age: Time,
    pub development_coefficient: Ratio,
    pub mean_strength: Pressure,
    pub characteristic_strength: Pressure,
    pub modulus: Pressure,
}

/// Reference-age properties plus one [`AgedRow`] per configured age.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyReport {
    pub edition: Edition,
    pub strength_class: StrengthClass,
    pub development_class: DevelopmentClass,
    pub reference_age: Time,
    pub characteristic_strength: Pressure,
    pub mean_strength: Pressure,
    pub modulus: Pressure,
    pub development_class_coefficient: f64,
    pub rows: Vec<AgedRow>,
}

impl PropertyReport {
    pub fn from_model(model: &ConcreteModel) -> ConcreteResult<Self> {
        let spec = &model.spec;
        let inputs = spec.current_age.pairs(&spec.curing_temperature)?;
        let t_t = model.equivalent_age()?;
        let beta = model.development_coefficient()?;
        let f_cm_t = model.age_adjusted_mean_strength()?;
        let f_ck_t = model.age_adjusted_characteristic_strength()?;
        let e_cm_t = model.age_adjusted_modulus()?;

        let rows = inputs
            .iter()
            .enumerate()
            .map(|(i, (age, temperature))| AgedRow {
                age: days(*age),
                curing_temperature: celsius(*temperature),
                equivalent_age: days(t_t.values()[i]),
                development_coefficient: unitless(beta.values()[i]),
                mean_strength: mpa(f_cm_t.values()[i]),
                characteristic_strength: mpa(f_ck_t.values()[i]),
                modulus: mpa(e_cm_t.values()[i]),
            })
            .collect();

        Ok(Self {
            edition: model.edition(),
            strength_class: spec.strength_class,
            development_class: spec.development_class,
            reference_age: days(model.reference_age()?),
            characteristic_strength: mpa(model.characteristic_strength()?),
            mean_strength: mpa(model.mean_strength()?),
            modulus: mpa(model.modulus()?),
            development_class_coefficient: model.development_class_coefficient()?,
            rows,
        })
    }
}
