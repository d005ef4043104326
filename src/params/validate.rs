//! Parameter validation.

use crate::error::{BuckError, Result};

/// Check that a physical quantity is finite and strictly positive.
pub fn validate_positive(param: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(BuckError::invalid_parameter(param, value, "must be a finite number"));
    }

    if value <= 0.0 {
        return Err(BuckError::invalid_parameter(param, value, "must be strictly positive"));
    }

    Ok(value)
}

/// Check that a duty ratio lies strictly inside (0, 1).
///
/// The endpoints are rejected: a ratio of 0 never closes the switch and a
/// ratio of 1 leaves no OFF sub-interval.
pub fn validate_duty_ratio(duty_ratio: f64) -> Result<f64> {
    if !duty_ratio.is_finite() {
        return Err(BuckError::invalid_parameter(
            "duty_ratio",
            duty_ratio,
            "must be a finite number",
        ));
    }

    if duty_ratio <= 0.0 || duty_ratio >= 1.0 {
        return Err(BuckError::invalid_parameter(
            "duty_ratio",
            duty_ratio,
            "must be strictly between 0 and 1",
        ));
    }

    Ok(duty_ratio)
}

/// Check that a repetition count is at least one.
pub fn validate_count(param: &'static str, count: usize) -> Result<usize> {
    if count == 0 {
        return Err(BuckError::invalid_parameter(param, 0.0, "must be at least 1"));
    }
    Ok(count)
}

/// Validate the six base quantities of a converter design.
///
/// Checks, in order:
/// - Input voltage, load resistance, inductance and switching frequency are
///   finite and strictly positive
/// - Duty ratio is strictly between 0 and 1
/// - Cycle count is at least one
pub fn validate_parameters(
    input_voltage: f64,
    load_resistance: f64,
    inductance: f64,
    switching_frequency: f64,
    duty_ratio: f64,
    cycle_count: usize,
) -> Result<()> {
    validate_positive("input_voltage", input_voltage)?;
    validate_positive("load_resistance", load_resistance)?;
    validate_positive("inductance", inductance)?;
    validate_positive("switching_frequency", switching_frequency)?;
    validate_duty_ratio(duty_ratio)?;
    validate_count("cycle_count", cycle_count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(validate_positive("inductance", 0.0).is_err());
        assert!(validate_positive("inductance", -1e-3).is_err());
        assert_eq!(validate_positive("inductance", 1e-3).unwrap(), 1e-3);
    }

    #[test]
    fn test_positive_rejects_non_finite() {
        assert!(validate_positive("switching_frequency", f64::NAN).is_err());
        assert!(validate_positive("switching_frequency", f64::INFINITY).is_err());
    }

    #[test]
    fn test_duty_ratio_bounds() {
        assert!(validate_duty_ratio(0.0).is_err());
        assert!(validate_duty_ratio(1.0).is_err());
        assert!(validate_duty_ratio(-0.2).is_err());
        assert!(validate_duty_ratio(f64::NAN).is_err());
        assert!(validate_duty_ratio(f64::MIN_POSITIVE).is_ok());
        assert!(validate_duty_ratio(0.999_999).is_ok());
    }

    #[test]
    fn test_error_names_first_bad_parameter() {
        let err = validate_parameters(100.0, 0.0, -1.0, 20_000.0, 0.3, 30).unwrap_err();
        assert_eq!(err.parameter(), Some("load_resistance"));

        let err = validate_parameters(100.0, 10.0, 1e-3, 20_000.0, 0.3, 0).unwrap_err();
        assert_eq!(err.parameter(), Some("cycle_count"));
    }
}
