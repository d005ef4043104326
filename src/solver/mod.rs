//! Cycle-by-cycle transient solver.
//!
//! This module advances the inductor current and output voltage of a buck
//! converter through alternating ON and OFF sub-intervals.
//!
//! ## Update rule
//!
//! Each sub-interval holds the inductor voltage constant, so the current
//! moves along a straight line:
//!
//! ```text
//! ON:   v_L = Vin - Vout      ΔI = v_L / L * D / Fsw
//! OFF:  v_L =   0 - Vout      ΔI = v_L / L * (1 - D) / Fsw
//! ```
//!
//! `Vout` is the value left by the previous sub-interval. After the current
//! step the load voltage is re-derived algebraically as `I * R`; there is no
//! output capacitor state.
//!
//! A run always performs exactly `2 * cycle_count` sub-interval steps.

mod phase;
mod simulator;
mod state;

pub use phase::Phase;
pub use simulator::{advance, simulate, Steps, TransientSimulator};
pub use state::{CurrentRamp, SampleSequence, SimulationState, Step};
