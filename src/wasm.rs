//! WASM bindings for Buck Sim.
//!
//! This module provides JavaScript-friendly bindings so a browser page can
//! run a startup transient and plot the resulting series.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmBuckSim } from 'buck_sim';
//!
//! await init();
//!
//! // 100 V in, 10 ohm, 1 mH, 20 kHz, D = 0.3, 30 cycles
//! const sim = new WasmBuckSim(100, 10, 0.001, 20000, 0.3, 30);
//!
//! plot(sim.times(), sim.currents(), 'IL');
//! plot(sim.times(), sim.voltages(), 'Vout');
//! ```

use wasm_bindgen::prelude::*;

use crate::error::BuckError;
use crate::params::ParameterSet;
use crate::solver::{SampleSequence, TransientSimulator};
use crate::waveform::SteadyStateWaveform;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: BuckError) -> JsValue {
    let err = BuckError::WasmError {
        message: err.to_string(),
    };
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible buck converter simulation.
///
/// The transient is computed once in the constructor; the accessors copy
/// the series out as `Float64Array`s.
#[wasm_bindgen]
pub struct WasmBuckSim {
    params: ParameterSet,
    samples: SampleSequence,
}

#[wasm_bindgen]
impl WasmBuckSim {
    /// Run a startup transient.
    ///
    /// # Arguments
    /// * `input_voltage` - Supply voltage in volts
    /// * `load_resistance` - Load in ohms
    /// * `inductance` - Inductance in henries
    /// * `switching_frequency` - Switching frequency in Hz
    /// * `duty_ratio` - Duty ratio in (0, 1)
    /// * `cycle_count` - Number of switching cycles
    #[wasm_bindgen(constructor)]
    pub fn new(
        input_voltage: f64,
        load_resistance: f64,
        inductance: f64,
        switching_frequency: f64,
        duty_ratio: f64,
        cycle_count: usize,
    ) -> Result<WasmBuckSim, JsValue> {
        let params = ParameterSet::new(
            input_voltage,
            load_resistance,
            inductance,
            switching_frequency,
            duty_ratio,
            cycle_count,
        )
        .map_err(to_js)?;
        let samples = TransientSimulator::new(params).run();

        Ok(WasmBuckSim { params, samples })
    }

    /// Sample times in seconds.
    #[wasm_bindgen]
    pub fn times(&self) -> Vec<f64> {
        self.samples.times()
    }

    /// Inductor current series in amperes.
    #[wasm_bindgen]
    pub fn currents(&self) -> Vec<f64> {
        self.samples.currents()
    }

    /// Output voltage series in volts.
    #[wasm_bindgen]
    pub fn voltages(&self) -> Vec<f64> {
        self.samples.voltages()
    }

    /// Number of samples (`2 * cycle_count + 1`).
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Steady-state sawtooth over `periods` periods, as interleaved
    /// `[t0, i0, t1, i1, ...]` pairs.
    #[wasm_bindgen]
    pub fn steady_state(&self, periods: usize) -> Vec<f64> {
        SteadyStateWaveform::new(&self.params)
            .points(periods)
            .iter()
            .flat_map(|p| [p.time, p.current])
            .collect()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
