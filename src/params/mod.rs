//! Converter design parameters and their validation.
//!
//! This module provides the [`ParameterSet`] record that every simulation
//! consumes. A `ParameterSet` can only be obtained through validating
//! constructors, so downstream code may divide by inductance and frequency
//! without further checks.

mod types;
mod validate;

pub use types::ParameterSet;
pub use validate::{
    validate_count, validate_duty_ratio, validate_parameters, validate_positive,
};
