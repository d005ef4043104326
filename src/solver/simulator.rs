//! Main simulator interface.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::params::ParameterSet;

use super::{CurrentRamp, Phase, SampleSequence, SimulationState, Step};

/// Advance `state` through one sub-interval.
///
/// The inductor voltage is evaluated with the output voltage held at its
/// value from the end of the previous sub-interval. The new output voltage
/// is the new current times the load resistance.
pub fn advance(params: &ParameterSet, phase: Phase, state: SimulationState) -> (CurrentRamp, SimulationState) {
    let start = state.inductor_current;
    let end = start + phase.current_delta(params, state.output_voltage);

    let next = SimulationState::with_current(
        state.time + phase.duration(params),
        end,
        params.load_resistance(),
    );

    (CurrentRamp { start, end }, next)
}

/// Cycle-by-cycle startup simulator for a buck converter.
#[derive(Debug, Clone)]
pub struct TransientSimulator {
    /// Design parameters for the run
    params: ParameterSet,
    /// State at t = 0 (zero energy unless overridden)
    initial: SimulationState,
}

impl TransientSimulator {
    /// Create a simulator starting from the zero-energy state.
    pub fn new(params: ParameterSet) -> Self {
        Self {
            params,
            initial: SimulationState::ZERO,
        }
    }

    /// Start from a different initial state.
    pub fn with_initial_state(mut self, initial: SimulationState) -> Self {
        self.initial = initial;
        self
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn initial_state(&self) -> SimulationState {
        self.initial
    }

    /// Lazily iterate over the `2 * cycle_count` sub-interval steps.
    pub fn steps(&self) -> Steps {
        Steps {
            params: self.params,
            phase: Phase::FIRST,
            state: self.initial,
            cycle: 0,
            remaining: 2 * self.params.cycle_count(),
        }
    }

    /// Run all cycles and collect the samples.
    ///
    /// The returned sequence starts with the initial state and holds exactly
    /// `2 * cycle_count + 1` samples. There is no early exit on convergence.
    pub fn run(&self) -> SampleSequence {
        debug!(params = %self.params, "starting transient run");

        let mut samples = Vec::with_capacity(2 * self.params.cycle_count() + 1);
        samples.push(self.initial);
        samples.extend(self.steps().map(|step| step.state));

        let sequence = SampleSequence::from_samples(samples);
        if let Some(last) = sequence.final_state() {
            debug!(
                samples = sequence.len(),
                time = last.time,
                current = last.inductor_current,
                voltage = last.output_voltage,
                "transient run finished"
            );
        }
        sequence
    }
}

/// Run a startup transient from zero initial energy.
pub fn simulate(params: &ParameterSet) -> SampleSequence {
    TransientSimulator::new(*params).run()
}

/// Iterator over the sub-interval steps of one run.
///
/// Strictly alternates ON and OFF starting with ON.
#[derive(Debug, Clone)]
pub struct Steps {
    params: ParameterSet,
    phase: Phase,
    state: SimulationState,
    cycle: usize,
    remaining: usize,
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.remaining == 0 {
            return None;
        }

        let phase = self.phase;
        let (ramp, state) = advance(&self.params, phase, self.state);
        let step = Step {
            cycle: self.cycle,
            phase,
            ramp,
            state,
        };

        trace!(
            cycle = step.cycle,
            phase = %phase,
            imin = ramp.min(),
            imax = ramp.max(),
            voltage = state.output_voltage,
            "sub-interval complete"
        );

        self.state = state;
        self.phase = phase.next();
        if phase == Phase::Off {
            self.cycle += 1;
        }
        self.remaining -= 1;

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}
