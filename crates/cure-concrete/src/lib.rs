//! cure-concrete: time- and temperature-dependent concrete properties.
//!
//! Provides, for EN 1992-1-1:2004 and EN 1992-1-1:2023:
//! - Strength and development class tables
//! - Maturity (temperature-adjusted) age from a curing history
//! - The strength development coefficient beta_cc(t)
//! - Mean strength, modulus of elasticity and their age-adjusted values
//! - `ConcreteModel`, a reconfigurable facade over one edition
//!
//! # Architecture
//!
//! Each edition implements the [`ConcreteStandard`] trait. A
//! [`ConcreteModel`] binds one edition to a mutable
//! [`ConcreteSpecification`] and derives every output from the current
//! inputs on each call. Ages and temperatures may be scalars or series
//! ([`Samples`]); outputs follow the input shape.
//!
//! # Example
//!
//! ```
//! use cure_concrete::{ConcreteModel, DevelopmentClass, Edition};
//!
//! let mut model = ConcreteModel::new(Edition::En2004);
//! model.spec.development_class = DevelopmentClass::N;
//! model.spec.current_age = 7.0.into();
//!
//! let f_cm_t = model.age_adjusted_mean_strength().unwrap();
//! assert!((f_cm_t.as_scalar().unwrap() - 29.59).abs() < 0.01);
//! ```

pub mod aging;
pub mod classes;
pub mod en2004;
pub mod en2023;
pub mod error;
pub mod maturity;
pub mod model;
pub mod properties;
pub mod report;
pub mod specification;
pub mod standard;
pub mod tables;

// Re-exports for ergonomics
pub use aging::{beta_cc_2004, beta_cc_2023};
pub use classes::{DevelopmentClass, StrengthBin, StrengthClass, UnknownLabel};
pub use cure_core::Samples;
pub use en2004::En2004;
pub use en2023::En2023;
pub use error::{ConcreteError, ConcreteResult};
pub use maturity::{CuringHistory, CuringInterval, MaturityClock};
pub use model::{AgedProperties, ConcreteModel};
pub use report::{AgedRow, PropertyReport};
pub use specification::ConcreteSpecification;
pub use standard::{ConcreteStandard, Edition};
pub use tables::{EN2004_TABLE, EN2023_TABLE, StandardTable};
