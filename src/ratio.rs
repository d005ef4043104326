//! Voltage transformation ratio of an ideal buck converter.
//!
//! Equating the inductor current rise during ON with its fall during OFF,
//! `(Vin - Vout) * D = Vout * (1 - D)`, gives `Vout / Vin = D`.

use crate::error::{BuckError, Result};
use crate::params::{validate_duty_ratio, validate_positive};

/// Duty ratio required to step `input_voltage` down to `output_voltage`.
///
/// # Errors
/// Both voltages must be strictly positive and the output must be below the
/// input, otherwise the ratio would fall outside (0, 1).
pub fn duty_ratio(input_voltage: f64, output_voltage: f64) -> Result<f64> {
    validate_positive("input_voltage", input_voltage)?;
    validate_positive("output_voltage", output_voltage)?;

    if output_voltage >= input_voltage {
        return Err(BuckError::invalid_parameter(
            "output_voltage",
            output_voltage,
            format!("a buck converter cannot reach {input_voltage} V or more"),
        ));
    }

    validate_duty_ratio(output_voltage / input_voltage)
}

/// Output voltage produced from `input_voltage` at the given duty ratio.
pub fn output_voltage(input_voltage: f64, duty_ratio: f64) -> Result<f64> {
    validate_positive("input_voltage", input_voltage)?;
    validate_duty_ratio(duty_ratio)?;
    Ok(duty_ratio * input_voltage)
}

/// Express a duty ratio as a percentage.
pub fn as_percentage(duty_ratio: f64) -> f64 {
    duty_ratio * 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_voltage_round_trips(vin in 1.0_f64..1000.0, fraction in 0.001_f64..0.999) {
            let vout = vin * fraction;
            let d = duty_ratio(vin, vout).unwrap();
            let back = output_voltage(vin, d).unwrap();
            prop_assert!((back - vout).abs() <= 1e-9 * vout.max(1.0));
        }
    }
}
