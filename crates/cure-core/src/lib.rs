//! cure-core: stable foundation for the curing workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for MPa, days, °C)
//! - numeric (Real + tolerances + float helpers)
//! - samples (scalar-or-series values evaluated element-wise)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod samples;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use samples::Samples;
pub use units::*;
