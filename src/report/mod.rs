//! Sample export and printed narration.
//!
//! The simulator only produces [`SampleSequence`]s; this module turns them
//! into CSV or JSON for an external plotting tool, plus the short text
//! summaries printed by the `buck` binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{BuckError, Result};
use crate::params::ParameterSet;
use crate::ratio;
use crate::solver::SampleSequence;
use crate::waveform::{SteadyStateWaveform, WaveformPoint};

/// CSV header for transient samples.
pub const SAMPLE_HEADER: &str = "time_s,inductor_current_a,output_voltage_v";

/// CSV header for steady-state waveform points.
pub const WAVEFORM_HEADER: &str = "time_s,inductor_current_a";

/// Output encoding for sample sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// A JSON array of `{time, inductor_current, output_voltage}` objects
    #[cfg(feature = "serde")]
    Json,
}

/// Write transient samples as CSV.
pub fn write_csv<W: Write>(writer: &mut W, samples: &SampleSequence) -> io::Result<()> {
    writeln!(writer, "{SAMPLE_HEADER}")?;
    for s in samples {
        writeln!(writer, "{},{},{}", s.time, s.inductor_current, s.output_voltage)?;
    }
    Ok(())
}

/// Write steady-state waveform points as CSV.
pub fn write_waveform_csv<W: Write>(writer: &mut W, points: &[WaveformPoint]) -> io::Result<()> {
    writeln!(writer, "{WAVEFORM_HEADER}")?;
    for p in points {
        writeln!(writer, "{},{}", p.time, p.current)?;
    }
    Ok(())
}

/// Write transient samples as a pretty-printed JSON array.
#[cfg(feature = "serde")]
pub fn write_json<W: Write>(writer: &mut W, samples: &SampleSequence) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, samples).map_err(|e| BuckError::SerializeError {
        message: e.to_string(),
    })?;
    writeln!(writer).map_err(|e| BuckError::output("<json>", e))
}

/// Open `path` for writing, or stdout when `path` is `None`.
///
/// Returns a label naming the destination for error messages.
fn open_output(path: Option<&Path>) -> Result<(String, Box<dyn Write>)> {
    match path {
        Some(p) => {
            let label = p.display().to_string();
            let file = File::create(p).map_err(|e| BuckError::output(label.clone(), e))?;
            Ok((label, Box::new(BufWriter::new(file))))
        }
        None => Ok((
            "<stdout>".to_string(),
            Box::new(BufWriter::new(io::stdout().lock())),
        )),
    }
}

/// Write samples in `format` to `path`, or to stdout when `path` is `None`.
pub fn export(samples: &SampleSequence, format: Format, path: Option<&Path>) -> Result<()> {
    let (label, mut writer) = open_output(path)?;

    match format {
        Format::Csv => {
            write_csv(&mut writer, samples).map_err(|e| BuckError::output(label.clone(), e))?
        }
        #[cfg(feature = "serde")]
        Format::Json => write_json(&mut writer, samples)?,
    }

    writer.flush().map_err(|e| BuckError::output(label, e))
}

/// Write steady-state points as CSV to `path`, or to stdout when `path` is `None`.
pub fn export_waveform(points: &[WaveformPoint], path: Option<&Path>) -> Result<()> {
    let (label, mut writer) = open_output(path)?;
    write_waveform_csv(&mut writer, points)
        .and_then(|_| writer.flush())
        .map_err(|e| BuckError::output(label, e))
}

/// Sentence reporting the duty ratio needed for a conversion.
pub fn describe_duty_ratio(input_voltage: f64, output_voltage: f64) -> Result<String> {
    let d = ratio::duty_ratio(input_voltage, output_voltage)?;
    Ok(format!(
        "The duty ratio required for an input voltage of {input_voltage} V and an output voltage of {output_voltage} V is {d} ({} %)",
        ratio::as_percentage(d)
    ))
}

/// Sentence reporting the output voltage at a given duty ratio.
pub fn describe_output_voltage(input_voltage: f64, duty_ratio: f64) -> Result<String> {
    let v = ratio::output_voltage(input_voltage, duty_ratio)?;
    Ok(format!(
        "Output voltage for an input voltage of {input_voltage} V and a duty ratio of {duty_ratio} is {v} V"
    ))
}

/// Sentence reporting the steady-state current operating point.
pub fn describe_waveform(waveform: &SteadyStateWaveform) -> String {
    format!(
        "Iaverage = {} A, delta I = {} A (Imin = {} A, Imax = {} A)",
        waveform.average_current(),
        waveform.ripple(),
        waveform.min_current(),
        waveform.max_current()
    )
}

/// Multi-line summary of a transient run.
pub fn describe_transient(params: &ParameterSet, samples: &SampleSequence) -> String {
    let mut out = format!("Startup transient: {params}\n");
    out.push_str(&format!("  samples:        {}\n", samples.len()));
    if let Some(last) = samples.final_state() {
        out.push_str(&format!("  end time:       {} s\n", last.time));
        out.push_str(&format!("  final current:  {} A\n", last.inductor_current));
        out.push_str(&format!("  final voltage:  {} V\n", last.output_voltage));
    }
    if let Some(peak) = samples.peak_voltage() {
        out.push_str(&format!("  peak voltage:   {peak} V\n"));
    }
    out.push_str(&format!(
        "  ideal voltage:  {} V\n",
        params.target_output_voltage()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::simulate;

    fn params() -> ParameterSet {
        ParameterSet::new(100.0, 10.0, 0.001, 20_000.0, 0.3, 2).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_sample() {
        let samples = simulate(&params());
        let mut buf = Vec::new();
        write_csv(&mut buf, &samples).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], SAMPLE_HEADER);
        assert_eq!(lines.len(), samples.len() + 1);
        assert_eq!(lines[1], "0,0,0");
    }

    #[test]
    fn test_waveform_csv() {
        let points = [
            WaveformPoint { time: 0.0, current: 1.0 },
            WaveformPoint { time: 0.5, current: 2.0 },
        ];
        let mut buf = Vec::new();
        write_waveform_csv(&mut buf, &points).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "time_s,inductor_current_a\n0,1\n0.5,2\n"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_is_an_array_of_samples() {
        let samples = simulate(&params());
        let mut buf = Vec::new();
        write_json(&mut buf, &samples).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 5);
        assert_eq!(array[0]["time"], 0.0);
        assert!(array[1]["inductor_current"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_export_to_unwritable_path_reports_output_error() {
        let samples = simulate(&params());
        let path = Path::new("/nonexistent-dir/for/sure/samples.csv");
        let err = export(&samples, Format::Csv, Some(path)).unwrap_err();
        assert!(matches!(err, BuckError::OutputError { .. }));

        let err = export_waveform(&[], Some(path)).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/for/sure/samples.csv"));
    }

    #[test]
    fn test_narration() {
        let text = describe_duty_ratio(12.0, 5.0).unwrap();
        assert!(text.contains("input voltage of 12 V"));
        assert!(text.contains("%"));

        let text = describe_output_voltage(100.0, 0.5).unwrap();
        assert!(text.ends_with("is 50 V"));

        assert!(describe_duty_ratio(5.0, 12.0).is_err());
    }

    #[test]
    fn test_transient_summary() {
        let p = params();
        let text = describe_transient(&p, &simulate(&p));
        assert!(text.starts_with("Startup transient: Vin=100 V"));
        assert!(text.contains("samples:        5"));
        assert!(text.contains("ideal voltage:"));
    }
}
