//! Temperature-adjusted (maturity) age.
//!
//! Arrhenius rate law relative to 20 °C, 2004 B.1(3) Eq. B.10 (interval sum)
//! and 2023 B.5(5) Eq. B.18 (constant temperature). The optional linear
//! activation-energy term follows SBi 125 and is conservative below 20 °C.

use crate::error::{ConcreteError, ConcreteResult};
use cure_core::{Real, ensure_finite, in_half_open, is_positive_finite};
use tracing::debug;

/// Gas constant R [J/(mol·K)]
pub const GAS_CONSTANT: Real = 8.314;
/// Activation energy E at and above 20 °C [J/mol]
pub const ACTIVATION_ENERGY: Real = 33_500.0;
/// Increase of E per degree below 20 °C [J/(mol·°C)]
pub const ACTIVATION_ENERGY_SLOPE: Real = 1_470.0;
/// Reference curing temperature [°C]
pub const REFERENCE_TEMPERATURE: Real = 20.0;
/// Upper bound of the admissible curing temperature [°C]
pub const MAX_CURING_TEMPERATURE: Real = 80.0;

const KELVIN_OFFSET: Real = 273.0;

/// One curing period at constant temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CuringInterval {
    /// Duration [days]
    pub duration: Real,
    /// Temperature during the period [°C]
    pub temperature: Real,
}

impl CuringInterval {
    pub fn new(duration: Real, temperature: Real) -> Self {
        Self {
            duration,
            temperature,
        }
    }
}

/// Real curing history of a concrete element.
#[derive(Debug, Clone, PartialEq)]
pub enum CuringHistory {
    /// Whole age at a single temperature.
    Constant { age: Real, temperature: Real },
    /// Consecutive periods whose contributions add up.
    Intervals(Vec<CuringInterval>),
}

/// Reject temperatures outside (0, 80] °C.
pub fn validate_temperature(temperature: Real) -> ConcreteResult<Real> {
    if in_half_open(temperature, 0.0, MAX_CURING_TEMPERATURE) {
        Ok(temperature)
    } else {
        Err(ConcreteError::InvalidTemperatureRange { value: temperature })
    }
}

/// Reject non-positive and non-finite ages.
pub fn validate_age(age: Real, what: &'static str) -> ConcreteResult<Real> {
    if is_positive_finite(age) {
        Ok(age)
    } else {
        Err(ConcreteError::InvalidAge { what, value: age })
    }
}

/// Converts real curing time into equivalent age at 20 °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityClock {
    /// Raise E by 1470 J/mol per degree below 20 °C.
    pub use_linear_activation_energy: bool,
}

impl Default for MaturityClock {
    fn default() -> Self {
        Self {
            use_linear_activation_energy: true,
        }
    }
}

impl MaturityClock {
    pub fn new(use_linear_activation_energy: bool) -> Self {
        Self {
            use_linear_activation_energy,
        }
    }

    /// Activation energy [J/mol] at a curing temperature [°C].
    pub fn activation_energy(&self, temperature: Real) -> Real {
        if self.use_linear_activation_energy {
            ACTIVATION_ENERGY + ACTIVATION_ENERGY_SLOPE * (REFERENCE_TEMPERATURE - temperature).max(0.0)
        } else {
            ACTIVATION_ENERGY
        }
    }

    /// Rate of hardening at `temperature` relative to 20 °C.
    pub fn rate_factor(&self, temperature: Real) -> ConcreteResult<Real> {
        let temperature = validate_temperature(temperature)?;
        let e = self.activation_energy(temperature);
        let factor = (e / GAS_CONSTANT
            * (1.0 / (KELVIN_OFFSET + REFERENCE_TEMPERATURE) - 1.0 / (KELVIN_OFFSET + temperature)))
            .exp();
        Ok(ensure_finite(factor, "maturity rate factor")?)
    }

    /// Equivalent age [days] of `age` days cured at a constant `temperature` [°C].
    pub fn equivalent_age(&self, age: Real, temperature: Real) -> ConcreteResult<Real> {
        validate_temperature(temperature)?;
        let age = validate_age(age, "concrete age")?;
        Ok(age * self.rate_factor(temperature)?)
    }

    /// Equivalent age [days] of a sequence of curing periods.
    ///
    /// Every temperature is checked before anything is summed; one bad entry
    /// rejects the whole history.
    pub fn equivalent_age_intervals(&self, intervals: &[CuringInterval]) -> ConcreteResult<Real> {
        for interval in intervals {
            validate_temperature(interval.temperature)?;
        }
        let mut total = 0.0;
        for interval in intervals {
            if !interval.duration.is_finite() || interval.duration < 0.0 {
                return Err(ConcreteError::InvalidAge {
                    what: "curing interval duration",
                    value: interval.duration,
                });
            }
            total += interval.duration * self.rate_factor(interval.temperature)?;
        }
        debug!(intervals = intervals.len(), equivalent_age = total, "summed curing history");
        validate_age(total, "equivalent age")
    }

    pub fn equivalent_age_of(&self, history: &CuringHistory) -> ConcreteResult<Real> {
        match history {
            CuringHistory::Constant { age, temperature } => self.equivalent_age(*age, *temperature),
            CuringHistory::Intervals(intervals) => self.equivalent_age_intervals(intervals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_temperature_is_identity() {
        let clock = MaturityClock::default();
        assert!((clock.equivalent_age(7.0, 20.0).unwrap() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn warm_curing_ages_faster() {
        let clock = MaturityClock::default();
        let expected = 7.0 * (33_500.0 / 8.314 * (1.0 / 293.0 - 1.0 / 303.0_f64)).exp();
        let t = clock.equivalent_age(7.0, 30.0).unwrap();
        assert!(t > 7.0);
        assert!((t - expected).abs() < 1e-9);
    }

    #[test]
    fn linear_activation_energy_below_reference() {
        let linear = MaturityClock::new(true);
        let constant = MaturityClock::new(false);
        assert_eq!(linear.activation_energy(10.0), 33_500.0 + 14_700.0);
        assert_eq!(linear.activation_energy(25.0), 33_500.0);
        assert_eq!(constant.activation_energy(10.0), 33_500.0);

        // Larger E below 20 °C means slower hardening
        let t_lin = linear.equivalent_age(28.0, 5.0).unwrap();
        let t_const = constant.equivalent_age(28.0, 5.0).unwrap();
        assert!(t_lin < t_const);
        assert!(t_const < 28.0);
    }

    #[test]
    fn temperature_bounds() {
        let clock = MaturityClock::default();
        assert!(clock.equivalent_age(28.0, 0.001).is_ok());
        assert!(clock.equivalent_age(28.0, 80.0).is_ok());
        assert_eq!(
            clock.equivalent_age(28.0, 0.0).unwrap_err(),
            ConcreteError::InvalidTemperatureRange { value: 0.0 }
        );
        assert!(clock.equivalent_age(28.0, 80.01).is_err());
        assert!(clock.equivalent_age(28.0, Real::NAN).is_err());
    }

    #[test]
    fn temperature_checked_before_age() {
        let clock = MaturityClock::default();
        let err = clock.equivalent_age(-1.0, 90.0).unwrap_err();
        assert!(matches!(err, ConcreteError::InvalidTemperatureRange { .. }));
        let err = clock.equivalent_age(-1.0, 20.0).unwrap_err();
        assert!(matches!(err, ConcreteError::InvalidAge { .. }));
    }

    #[test]
    fn intervals_use_their_own_temperature() {
        let clock = MaturityClock::default();
        let intervals = [CuringInterval::new(3.0, 5.0), CuringInterval::new(4.0, 30.0)];
        let expected =
            clock.equivalent_age(3.0, 5.0).unwrap() + clock.equivalent_age(4.0, 30.0).unwrap();
        let t = clock.equivalent_age_intervals(&intervals).unwrap();
        assert!((t - expected).abs() < 1e-12);
    }

    #[test]
    fn single_interval_matches_constant_form() {
        let clock = MaturityClock::default();
        let history = CuringHistory::Intervals(vec![CuringInterval::new(10.0, 12.0)]);
        let a = clock.equivalent_age_of(&history).unwrap();
        let b = clock
            .equivalent_age_of(&CuringHistory::Constant {
                age: 10.0,
                temperature: 12.0,
            })
            .unwrap();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn one_bad_interval_rejects_history() {
        let clock = MaturityClock::default();
        let intervals = [
            CuringInterval::new(3.0, 20.0),
            CuringInterval::new(1.0, -2.0),
            CuringInterval::new(4.0, 20.0),
        ];
        assert_eq!(
            clock.equivalent_age_intervals(&intervals).unwrap_err(),
            ConcreteError::InvalidTemperatureRange { value: -2.0 }
        );
    }

    #[test]
    fn empty_or_zero_length_history_rejected() {
        let clock = MaturityClock::default();
        assert_eq!(
            clock.equivalent_age_intervals(&[]).unwrap_err(),
            ConcreteError::InvalidAge {
                what: "equivalent age",
                value: 0.0
            }
        );
        assert!(matches!(
            clock.equivalent_age_intervals(&[CuringInterval::new(0.0, 20.0)]),
            Err(ConcreteError::InvalidAge { .. })
        ));
        // A zero-length period alongside a real one contributes nothing
        let t = clock
            .equivalent_age_intervals(&[CuringInterval::new(0.0, 5.0), CuringInterval::new(2.0, 20.0)])
            .unwrap();
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn negative_duration_rejected() {
        let clock = MaturityClock::default();
        let intervals = [CuringInterval::new(-3.0, 20.0)];
        assert!(matches!(
            clock.equivalent_age_intervals(&intervals),
            Err(ConcreteError::InvalidAge { .. })
        ));
    }
}
