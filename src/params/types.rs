//! The immutable parameter record for one simulation run.

use std::fmt;

use crate::error::Result;

use super::validate::validate_parameters;

/// Design parameters of a buck converter.
///
/// The ON and OFF sub-interval durations are derived once at construction
/// from the duty ratio and switching frequency and are never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterSet {
    /// Input (supply) voltage in volts
    input_voltage: f64,
    /// Load resistance in ohms
    load_resistance: f64,
    /// Inductance in henries
    inductance: f64,
    /// Switching frequency in hertz
    switching_frequency: f64,
    /// Fraction of the period the switch conducts
    duty_ratio: f64,
    /// ON sub-interval duration (D / Fsw), in seconds
    on_duration: f64,
    /// OFF sub-interval duration ((1 - D) / Fsw), in seconds
    off_duration: f64,
    /// Number of ON+OFF cycles to simulate
    cycle_count: usize,
}

impl ParameterSet {
    /// Create a parameter set from the six base quantities.
    ///
    /// # Errors
    /// Returns [`BuckError::InvalidParameter`](crate::BuckError::InvalidParameter)
    /// if the duty ratio is outside (0, 1), if any of the voltage, resistance,
    /// inductance or frequency is not finite and strictly positive, or if
    /// `cycle_count` is zero.
    pub fn new(
        input_voltage: f64,
        load_resistance: f64,
        inductance: f64,
        switching_frequency: f64,
        duty_ratio: f64,
        cycle_count: usize,
    ) -> Result<Self> {
        validate_parameters(
            input_voltage,
            load_resistance,
            inductance,
            switching_frequency,
            duty_ratio,
            cycle_count,
        )?;

        Ok(Self {
            input_voltage,
            load_resistance,
            inductance,
            switching_frequency,
            duty_ratio,
            on_duration: duty_ratio / switching_frequency,
            off_duration: (1.0 - duty_ratio) / switching_frequency,
            cycle_count,
        })
    }

    /// Create a parameter set whose duty ratio is derived from a target
    /// output voltage (`D = Vout / Vin`).
    pub fn from_target(
        input_voltage: f64,
        target_output_voltage: f64,
        load_resistance: f64,
        inductance: f64,
        switching_frequency: f64,
        cycle_count: usize,
    ) -> Result<Self> {
        let duty_ratio = crate::ratio::duty_ratio(input_voltage, target_output_voltage)?;
        Self::new(
            input_voltage,
            load_resistance,
            inductance,
            switching_frequency,
            duty_ratio,
            cycle_count,
        )
    }

    /// Return a copy simulating a different number of cycles.
    pub fn with_cycle_count(self, cycle_count: usize) -> Result<Self> {
        Self::new(
            self.input_voltage,
            self.load_resistance,
            self.inductance,
            self.switching_frequency,
            self.duty_ratio,
            cycle_count,
        )
    }

    pub fn input_voltage(&self) -> f64 {
        self.input_voltage
    }

    pub fn load_resistance(&self) -> f64 {
        self.load_resistance
    }

    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    pub fn switching_frequency(&self) -> f64 {
        self.switching_frequency
    }

    pub fn duty_ratio(&self) -> f64 {
        self.duty_ratio
    }

    pub fn cycle_count(&self) -> usize {
        self.cycle_count
    }

    /// Duration of the ON sub-interval in seconds.
    pub fn on_duration(&self) -> f64 {
        self.on_duration
    }

    /// Duration of the OFF sub-interval in seconds.
    pub fn off_duration(&self) -> f64 {
        self.off_duration
    }

    /// Switching period (ON + OFF) in seconds.
    pub fn period(&self) -> f64 {
        self.on_duration + self.off_duration
    }

    /// Ideal output voltage in continuous conduction (`D * Vin`).
    pub fn target_output_voltage(&self) -> f64 {
        self.duty_ratio * self.input_voltage
    }

    /// Average inductor current at the ideal output voltage.
    pub fn average_current(&self) -> f64 {
        self.target_output_voltage() / self.load_resistance
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vin={} V, R={} ohm, L={} H, Fsw={} Hz, D={}, cycles={}",
            self.input_voltage,
            self.load_resistance,
            self.inductance,
            self.switching_frequency,
            self.duty_ratio,
            self.cycle_count
        )
    }
}
