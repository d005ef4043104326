//! Buck - buck converter startup simulator
//!
//! Computes duty ratios, steady-state ripple waveforms and cycle-by-cycle
//! startup transients of a buck converter.
//!
//! # Usage
//!
//! ```bash
//! buck duty --vin 12 --vout 5
//! buck steady --vin 100 --vout 50 --inductance 0.002 --frequency 10000
//! buck transient --vin 100 --target 30 --cycles 30 --output startup.csv
//! ```

use std::io;
use std::path::PathBuf;

use buck_sim::{
    error::Result,
    ratio,
    report::{self, Format},
    waveform::{SteadyStateWaveform, DEFAULT_PERIODS},
    ParameterSet, TransientSimulator, DEFAULT_CYCLE_COUNT, DEFAULT_INDUCTANCE,
    DEFAULT_INPUT_VOLTAGE, DEFAULT_LOAD_RESISTANCE, DEFAULT_SWITCHING_FREQUENCY,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Buck converter startup simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Duty ratio needed to reach an output voltage
    Duty {
        /// Input voltage in volts
        #[arg(long)]
        vin: f64,
        /// Desired output voltage in volts
        #[arg(long)]
        vout: f64,
    },
    /// Output voltage produced by a duty ratio
    Vout {
        /// Input voltage in volts
        #[arg(long)]
        vin: f64,
        /// Duty ratio in (0, 1)
        #[arg(long)]
        duty: f64,
    },
    /// Idealized steady-state inductor current sawtooth
    Steady {
        #[command(flatten)]
        circuit: CircuitArgs,
        /// Output voltage in volts
        #[arg(long, default_value_t = 50.0)]
        vout: f64,
        /// Number of switching periods to draw
        #[arg(long, default_value_t = DEFAULT_PERIODS)]
        periods: usize,
        /// Write points to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Cycle-by-cycle startup transient from zero energy
    Transient {
        #[command(flatten)]
        circuit: CircuitArgs,
        /// Target output voltage in volts (sets D = target / vin)
        #[arg(long, default_value_t = 30.0, conflicts_with = "duty")]
        target: f64,
        /// Duty ratio in (0, 1), overrides --target
        #[arg(long)]
        duty: Option<f64>,
        /// Number of switching cycles
        #[arg(long, default_value_t = DEFAULT_CYCLE_COUNT)]
        cycles: usize,
        /// Sample output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        /// Write samples to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Component values shared by the waveform commands.
#[derive(Args, Debug)]
struct CircuitArgs {
    /// Input voltage in volts
    #[arg(long, default_value_t = DEFAULT_INPUT_VOLTAGE)]
    vin: f64,
    /// Load resistance in ohms
    #[arg(long, default_value_t = DEFAULT_LOAD_RESISTANCE)]
    resistance: f64,
    /// Inductance in henries
    #[arg(long, default_value_t = DEFAULT_INDUCTANCE)]
    inductance: f64,
    /// Switching frequency in Hz
    #[arg(long, default_value_t = DEFAULT_SWITCHING_FREQUENCY)]
    frequency: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Duty { vin, vout } => {
            println!("{}", report::describe_duty_ratio(vin, vout)?);
        }
        Command::Vout { vin, duty } => {
            println!("{}", report::describe_output_voltage(vin, duty)?);
        }
        Command::Steady {
            circuit,
            vout,
            periods,
            output,
        } => {
            let params = ParameterSet::from_target(
                circuit.vin,
                vout,
                circuit.resistance,
                circuit.inductance,
                circuit.frequency,
                1,
            )?;
            let waveform = SteadyStateWaveform::new(&params);
            eprintln!("{}", report::describe_waveform(&waveform));

            report::export_waveform(&waveform.points(periods), output.as_deref())?;
        }
        Command::Transient {
            circuit,
            target,
            duty,
            cycles,
            format,
            output,
        } => {
            let duty = match duty {
                Some(d) => d,
                None => ratio::duty_ratio(circuit.vin, target)?,
            };
            let params = ParameterSet::new(
                circuit.vin,
                circuit.resistance,
                circuit.inductance,
                circuit.frequency,
                duty,
                cycles,
            )?;

            let samples = TransientSimulator::new(params).run();
            eprint!("{}", report::describe_transient(&params, &samples));
            report::export(&samples, format, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
