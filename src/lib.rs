//! # Buck Sim
//!
//! A cycle-by-cycle simulator for buck (step-down) DC-DC converters.
//!
//! This library provides:
//! - Validated converter design parameters
//! - Duty ratio / voltage ratio algebra
//! - A startup transient solver working one ON or OFF sub-interval at a time
//! - The idealized steady-state inductor current sawtooth
//! - CSV/JSON export of the resulting series (CLI only)
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`params`] - The immutable [`ParameterSet`] and its validation
//! - [`ratio`] - `Vout / Vin = D` in both directions
//! - [`solver`] - The transient stepping loop
//! - [`waveform`] - Closed-form steady-state ripple points
//! - [`report`] - Sample export and printed summaries
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! buck transient --vin 100 --target 30 --cycles 30 > startup.csv
//! ```
//!
//! ### Library
//!
//! ```
//! use buck_sim::{simulate, ParameterSet};
//!
//! let params = ParameterSet::new(100.0, 10.0, 0.001, 20_000.0, 0.3, 30)?;
//! let samples = simulate(&params);
//! assert_eq!(samples.len(), 61);
//! # Ok::<(), buck_sim::BuckError>(())
//! ```
//!
//! ## Model
//!
//! There is no output capacitor. During each sub-interval the inductor
//! voltage is frozen at its value from the previous sub-interval, so the
//! current ramps linearly; the load voltage is then recomputed as `I * R`.
//! Negative inductor current during the first cycles is a legitimate
//! output of this model.

pub mod error;
pub mod params;
pub mod ratio;
pub mod report;
pub mod solver;
pub mod waveform;

// Re-export main types for convenience
pub use error::{BuckError, Result};
pub use params::ParameterSet;
pub use solver::{simulate, SampleSequence, SimulationState, TransientSimulator};
pub use waveform::SteadyStateWaveform;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmBuckSim;

/// Default input voltage in volts
pub const DEFAULT_INPUT_VOLTAGE: f64 = 100.0;

/// Default load resistance in ohms
pub const DEFAULT_LOAD_RESISTANCE: f64 = 10.0;

/// Default inductance in henries
pub const DEFAULT_INDUCTANCE: f64 = 0.001;

/// Default switching frequency in Hz
pub const DEFAULT_SWITCHING_FREQUENCY: f64 = 20_000.0;

/// Default number of cycles for a startup run
pub const DEFAULT_CYCLE_COUNT: usize = 30;
