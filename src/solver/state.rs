//! Simulation state, per-step records and the emitted sample sequence.

use super::Phase;

/// Snapshot of the converter at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationState {
    /// Elapsed time in seconds
    pub time: f64,
    /// Inductor current in amperes (may go negative in this model)
    pub inductor_current: f64,
    /// Load voltage in volts, always derived from the current
    pub output_voltage: f64,
}

impl SimulationState {
    /// Zero-energy initial condition at t = 0.
    pub const ZERO: SimulationState = SimulationState {
        time: 0.0,
        inductor_current: 0.0,
        output_voltage: 0.0,
    };

    /// Create a state from its three components.
    pub fn new(time: f64, inductor_current: f64, output_voltage: f64) -> Self {
        Self {
            time,
            inductor_current,
            output_voltage,
        }
    }

    /// State at `time` whose output voltage is consistent with `current` flowing into `resistance`.
    pub fn with_current(time: f64, current: f64, resistance: f64) -> Self {
        Self::new(time, current, current * resistance)
    }
}

/// Start and end current of one linear ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentRamp {
    /// Current entering the sub-interval (`imin` while rising)
    pub start: f64,
    /// Current leaving the sub-interval (`imax` while rising)
    pub end: f64,
}

impl CurrentRamp {
    /// Mean current over the sub-interval.
    pub fn average(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Signed change across the sub-interval.
    pub fn delta(&self) -> f64 {
        self.end - self.start
    }

    /// Smaller of the two endpoints.
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Larger of the two endpoints.
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }
}

/// Result of advancing through one sub-interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Zero-based cycle index this step belongs to
    pub cycle: usize,
    /// Sub-interval that was just completed
    pub phase: Phase,
    /// Current ramp across the sub-interval
    pub ramp: CurrentRamp,
    /// State at the end of the sub-interval
    pub state: SimulationState,
}

/// Time-ordered samples of one run.
///
/// Holds the initial state followed by one sample at the end of every ON and
/// every OFF sub-interval, so a run of `n` cycles yields `2n + 1` samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleSequence {
    samples: Vec<SimulationState>,
}

impl SampleSequence {
    pub(crate) fn from_samples(samples: Vec<SimulationState>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationState> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[SimulationState] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&SimulationState> {
        self.samples.get(index)
    }

    /// Sample times in seconds.
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }

    /// Inductor current series.
    pub fn currents(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.inductor_current).collect()
    }

    /// Output voltage series.
    pub fn voltages(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.output_voltage).collect()
    }

    /// The initial sample followed by the end of every OFF sub-interval.
    pub fn cycle_ends(&self) -> impl Iterator<Item = &SimulationState> + '_ {
        self.samples.iter().step_by(2)
    }

    /// Samples taken at the end of every ON sub-interval.
    pub fn on_ends(&self) -> impl Iterator<Item = &SimulationState> + '_ {
        self.samples.iter().skip(1).step_by(2)
    }

    pub fn first_state(&self) -> Option<&SimulationState> {
        self.samples.first()
    }

    pub fn final_state(&self) -> Option<&SimulationState> {
        self.samples.last()
    }

    /// Highest output voltage seen during the run.
    pub fn peak_voltage(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.output_voltage).reduce(f64::max)
    }

    /// Lowest inductor current seen during the run.
    pub fn min_current(&self) -> Option<f64> {
        self.samples.iter().map(|s| s.inductor_current).reduce(f64::min)
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a SimulationState;
    type IntoIter = std::slice::Iter<'a, SimulationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl From<SampleSequence> for Vec<SimulationState> {
    fn from(sequence: SampleSequence) -> Self {
        sequence.samples
    }
}
