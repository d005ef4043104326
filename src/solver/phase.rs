//! The two sub-intervals of a switching cycle.

use std::fmt;

use crate::params::ParameterSet;

/// Switch position during a sub-interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Switch conducting, inductor sees `Vin - Vout`
    On,
    /// Switch open, freewheeling diode clamps the inductor input to ground
    Off,
}

impl Phase {
    /// Phase every cycle begins with.
    pub const FIRST: Phase = Phase::On;

    /// The phase that follows this one.
    pub fn next(self) -> Phase {
        match self {
            Phase::On => Phase::Off,
            Phase::Off => Phase::On,
        }
    }

    /// Sub-interval duration in seconds.
    pub fn duration(self, params: &ParameterSet) -> f64 {
        match self {
            Phase::On => params.on_duration(),
            Phase::Off => params.off_duration(),
        }
    }

    /// Voltage across the inductor for the given output voltage.
    pub fn inductor_voltage(self, params: &ParameterSet, output_voltage: f64) -> f64 {
        match self {
            Phase::On => params.input_voltage() - output_voltage,
            Phase::Off => 0.0 - output_voltage,
        }
    }

    /// Rate of change of inductor current (A/s), `v_L / L`.
    pub fn slope(self, params: &ParameterSet, output_voltage: f64) -> f64 {
        self.inductor_voltage(params, output_voltage) / params.inductance()
    }

    /// Current change over the whole sub-interval, `slope * duration`.
    pub fn current_delta(self, params: &ParameterSet, output_voltage: f64) -> f64 {
        self.slope(params, output_voltage) * self.duration(params)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::On => write!(f, "ON"),
            Phase::Off => write!(f, "OFF"),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ripple_balances_at_duty_times_input(
            vin in 1.0_f64..500.0,
            r in 0.1_f64..100.0,
            l in 1e-6_f64..1e-1,
            fs in 1e3_f64..1e6,
            d in 0.01_f64..0.99,
        ) {
            let p = ParameterSet::new(vin, r, l, fs, d, 1).unwrap();
            let v = d * vin;
            let rise = Phase::On.current_delta(&p, v);
            let fall = Phase::Off.current_delta(&p, v);
            prop_assert!((rise + fall).abs() <= 1e-9 * rise.abs().max(1e-12));
        }
    }
}
