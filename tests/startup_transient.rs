//! End-to-end checks of the startup transient against the worked scenario:
//! 100 V in, 10 ohm load, 1 mH, 20 kHz, D = 0.3, 30 cycles.

use approx::assert_relative_eq;
use buck_sim::{
    ratio, simulate, solver::Phase, BuckError, ParameterSet, SimulationState,
    SteadyStateWaveform, TransientSimulator,
};
use proptest::prelude::*;

fn startup() -> ParameterSet {
    ParameterSet::from_target(100.0, 30.0, 10.0, 0.001, 20_000.0, 30).unwrap()
}

#[test]
fn sequence_shape() {
    let samples = simulate(&startup());

    assert_eq!(samples.len(), 2 * 30 + 1);
    assert_eq!(samples.first_state(), Some(&SimulationState::ZERO));

    for pair in samples.as_slice().windows(2) {
        assert!(pair[1].time > pair[0].time);
    }

    let end = samples.final_state().unwrap().time;
    assert_relative_eq!(end, 30.0 / 20_000.0, max_relative = 1e-9);
}

#[test]
fn output_voltage_rises_cycle_over_cycle() {
    let p = startup();
    let samples = simulate(&p);

    let ends: Vec<f64> = samples.cycle_ends().map(|s| s.output_voltage).collect();
    assert_eq!(ends.len(), 31);
    for pair in ends.windows(2) {
        assert!(pair[1] >= pair[0] - 1e-9, "{} -> {}", pair[0], pair[1]);
    }

    // Settles below the ideal D * Vin and well below the supply
    let last = *ends.last().unwrap();
    assert!(last > 20.0 && last < p.target_output_voltage());
    assert!(samples.peak_voltage().unwrap() < p.input_voltage());
}

#[test]
fn settles_to_a_fixed_point() {
    let p = startup();
    let samples = simulate(&p);
    let ends: Vec<f64> = samples.cycle_ends().map(|s| s.inductor_current).collect();

    // Per-cycle map is i -> (1 - R*toff/L) * ((1 - R*ton/L) * i + Vin*ton/L)
    let a = p.on_duration() / p.inductance();
    let b = p.off_duration() / p.inductance();
    let r = p.load_resistance();
    let gain = (1.0 - r * b) * (1.0 - r * a);
    let fixed = (1.0 - r * b) * p.input_voltage() * a / (1.0 - gain);

    assert_relative_eq!(*ends.last().unwrap(), fixed, max_relative = 1e-6);
}

#[test]
fn equilibrium_ripple_cancels() {
    let p = startup();
    let v = ratio::output_voltage(p.input_voltage(), p.duty_ratio()).unwrap();
    let rise = Phase::On.current_delta(&p, v);
    let fall = Phase::Off.current_delta(&p, v);
    assert_relative_eq!(rise + fall, 0.0, epsilon = 1e-12);

    // Same magnitude as the closed-form steady-state ripple
    assert_relative_eq!(rise, SteadyStateWaveform::new(&p).ripple(), max_relative = 1e-12);
}

#[test]
fn steps_match_samples() {
    let sim = TransientSimulator::new(startup());
    let samples = sim.run();
    for (step, sample) in sim.steps().zip(samples.iter().skip(1)) {
        assert_eq!(step.state, *sample);
    }
}

#[test]
fn boundary_duty_ratios_are_rejected() {
    for d in [0.0, 1.0] {
        let err = ParameterSet::new(100.0, 10.0, 0.001, 20_000.0, d, 30).unwrap_err();
        assert!(matches!(
            err,
            BuckError::InvalidParameter {
                param: "duty_ratio",
                ..
            }
        ));
    }
}

#[test]
fn worked_ratio_examples() {
    let d = ratio::duty_ratio(12.0, 5.0).unwrap();
    assert_relative_eq!(d, 0.41667, epsilon = 1e-5);
    assert_relative_eq!(ratio::as_percentage(d), 41.667, epsilon = 1e-3);
    assert_relative_eq!(ratio::output_voltage(100.0, 0.5).unwrap(), 50.0);
}

proptest! {
    #[test]
    fn any_valid_run_has_expected_shape(
        vin in 1.0_f64..400.0,
        r in 0.5_f64..50.0,
        l in 1e-4_f64..1e-2,
        fs in 1e3_f64..2e5,
        d in 0.05_f64..0.95,
        cycles in 1_usize..64,
    ) {
        let p = ParameterSet::new(vin, r, l, fs, d, cycles).unwrap();
        let samples = simulate(&p);

        prop_assert_eq!(samples.len(), 2 * cycles + 1);
        prop_assert_eq!(samples.first_state(), Some(&SimulationState::ZERO));
        for pair in samples.as_slice().windows(2) {
            prop_assert!(pair[1].time > pair[0].time);
        }
    }
}
