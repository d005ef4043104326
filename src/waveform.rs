//! Idealized steady-state inductor current waveform.
//!
//! Assuming the converter has settled, the current is a sawtooth around the
//! load current with peak-to-peak ripple
//! `ΔI = (Vin - Vout) * D / (L * Fsw)`. No state is iterated; every point is
//! computed in closed form. The transient solver never calls into this module.

use crate::params::ParameterSet;

/// Number of switching periods drawn by default (7 points).
pub const DEFAULT_PERIODS: usize = 3;

/// A single `(time, current)` point on the sawtooth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WaveformPoint {
    pub time: f64,
    pub current: f64,
}

/// Closed-form steady-state current waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateWaveform {
    /// Average inductor current (equal to the load current)
    average_current: f64,
    /// Peak-to-peak ripple
    ripple: f64,
    on_duration: f64,
    period: f64,
}

impl SteadyStateWaveform {
    /// Build the waveform for a converter operating at `D * Vin`.
    pub fn new(params: &ParameterSet) -> Self {
        let output_voltage = params.target_output_voltage();
        let ripple = (params.input_voltage() - output_voltage) * params.duty_ratio()
            / (params.inductance() * params.switching_frequency());

        Self {
            average_current: output_voltage / params.load_resistance(),
            ripple,
            on_duration: params.on_duration(),
            period: params.period(),
        }
    }

    pub fn average_current(&self) -> f64 {
        self.average_current
    }

    /// Peak-to-peak ripple `ΔI`.
    pub fn ripple(&self) -> f64 {
        self.ripple
    }

    /// Valley current at the start of each ON sub-interval.
    pub fn min_current(&self) -> f64 {
        self.average_current - self.ripple / 2.0
    }

    /// Peak current at the end of each ON sub-interval.
    pub fn max_current(&self) -> f64 {
        self.average_current + self.ripple / 2.0
    }

    /// Sawtooth corner points over `periods` switching periods.
    ///
    /// Yields `2 * periods + 1` points at `0, ton, Ts, Ts + ton, 2Ts, ...`,
    /// alternating valley and peak and ending on a valley.
    pub fn points(&self, periods: usize) -> Vec<WaveformPoint> {
        let (imin, imax) = (self.min_current(), self.max_current());
        let mut points = Vec::with_capacity(2 * periods + 1);

        for k in 0..periods {
            let start = k as f64 * self.period;
            points.push(WaveformPoint { time: start, current: imin });
            points.push(WaveformPoint {
                time: start + self.on_duration,
                current: imax,
            });
        }
        points.push(WaveformPoint {
            time: periods as f64 * self.period,
            current: imin,
        });

        points
    }
}
