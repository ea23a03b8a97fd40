//! Concrete property errors.

use crate::standard::Edition;
use cure_core::CoreError;
use thiserror::Error;

/// Result type for concrete property operations.
pub type ConcreteResult<T> = Result<T, ConcreteError>;

/// Errors raised while evaluating concrete properties.
///
/// All of them are deterministic input-validation failures, raised at the
/// first invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConcreteError {
    /// Strength class label not present in the edition's table.
    #[error("Unknown strength class '{label}' for {edition}")]
    UnknownStrengthClass { label: String, edition: Edition },

    /// Development (cement) class label not present in the edition's table.
    #[error("Unknown development class '{label}' for {edition}")]
    UnknownDevelopmentClass { label: String, edition: Edition },

    /// Curing temperature outside (0, 80] °C.
    #[error("The temperature should be between 0 and 80 degrees C (got {value})")]
    InvalidTemperatureRange { value: f64 },

    /// Non-positive (or non-finite) age.
    #[error("Invalid age for {what}: {value} days")]
    InvalidAge { what: &'static str, value: f64 },

    /// Aggregate coefficient k_E outside [5000, 13000].
    #[error("Aggregate coefficient k_E must be between 5000 and 13000 (got {value})")]
    InvalidAggregateCoefficient { value: f64 },

    /// Reference age the edition cannot represent.
    #[error("{edition} does not support a reference age of {value} days")]
    UnsupportedReferenceAge { edition: Edition, value: f64 },

    /// Curing history shape the edition cannot evaluate.
    #[error("{edition} only supports constant-temperature curing")]
    UnsupportedCuringHistory { edition: Edition },

    #[error(transparent)]
    Numeric(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConcreteError::UnknownStrengthClass {
            label: "C100/115".into(),
            edition: Edition::En2004,
        };
        assert!(err.to_string().contains("C100/115"));
        assert!(err.to_string().contains("2004"));

        let err = ConcreteError::InvalidTemperatureRange { value: 0.0 };
        assert!(err.to_string().contains("between 0 and 80"));
    }

    #[test]
    fn core_error_converts() {
        let err: ConcreteError = CoreError::SeriesLengthMismatch { left: 2, right: 3 }.into();
        assert!(matches!(err, ConcreteError::Numeric(_)));
        assert!(err.to_string().contains("2 vs 3"));
    }
}
