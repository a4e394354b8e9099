//! One-shot turnaround forecast from the command line.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin mro_predict -- --age 12 --cycles 100 --hours 2000 --util 8 --region "East Asia"
//! ```
//!
//! Omitted inputs take the calculator defaults. `--breakdown` adds the
//! per-term contributions; `--json` prints the full forecast as JSON.
//! `MRO_FORECAST_COEFFICIENTS` selects an alternative coefficient table.
//!
//! Exit codes: 0 on success, 1 when the forecast fails (unknown region,
//! unusable coefficient table), 2 for bad arguments.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use mro_forecast::adapters::source_for;
use mro_forecast::application::ForecastService;
use mro_forecast::config::Settings;
use mro_forecast::domain::{
    format_days, AircraftProfile, Region, DEFAULT_AGE, DEFAULT_ANNUAL_CYCLES,
    DEFAULT_ANNUAL_HOURS, DEFAULT_DAILY_UTILISATION,
};

const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
struct Args {
    age: u32,
    cycles: f64,
    hours: f64,
    util: f64,
    region: String,
    breakdown: bool,
    json: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            cycles: DEFAULT_ANNUAL_CYCLES,
            hours: DEFAULT_ANNUAL_HOURS,
            util: DEFAULT_DAILY_UTILISATION,
            region: Region::default().label().to_string(),
            breakdown: false,
            json: false,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Predict(Args),
    Help,
}

fn usage() -> String {
    "Usage: mro_predict [--age <1-30>] [--cycles <n>] [--hours <n>] [--util <n>] \
     [--region <name>] [--breakdown] [--json]"
        .to_string()
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let v = value.ok_or_else(|| format!("{flag} needs a value"))?;
    v.trim()
        .parse()
        .map_err(|_| format!("{flag} expects a number, got {v:?}"))
}

fn parse_finite(flag: &str, value: Option<String>) -> Result<f64, String> {
    let n: f64 = parse_value(flag, value)?;
    if n.is_finite() {
        Ok(n)
    } else {
        Err(format!("{flag} must be a finite number, got {n}"))
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--age" => parsed.age = parse_value("--age", args.next())?,
            "--cycles" => parsed.cycles = parse_finite("--cycles", args.next())?,
            "--hours" => parsed.hours = parse_finite("--hours", args.next())?,
            "--util" => parsed.util = parse_finite("--util", args.next())?,
            "--region" => {
                parsed.region = args
                    .next()
                    .ok_or_else(|| "--region needs a value".to_string())?
            }
            "--breakdown" => parsed.breakdown = true,
            "--json" => parsed.json = true,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument {other:?}")),
        }
    }

    Ok(Command::Predict(parsed))
}

fn run(args: &Args, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let source = source_for(settings.coefficients_path.as_deref());
    let service = ForecastService::from_source(source.as_ref())
        .with_context(|| format!("Failed to load coefficients from {}", source.describe()))?;

    let region: Region = args.region.parse()?;
    let profile = AircraftProfile::new(args.age, args.cycles, args.hours, args.util, region);
    let forecast = service.forecast(&profile);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&forecast)?)?;
        return Ok(());
    }

    writeln!(out, "{}", format_days(forecast.days))?;
    if args.breakdown {
        for term in &forecast.terms {
            writeln!(
                out,
                "  {:<20} {:>12.4} x {:>14.6} = {:>+10.4}",
                term.term.label(),
                term.value,
                term.weight,
                term.contribution
            )?;
        }
    }
    Ok(())
}

/// Parse, run and report; returns the process exit code.
fn execute(
    argv: impl Iterator<Item = String>,
    settings: &Settings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    let args = match parse_args(argv) {
        Ok(Command::Predict(args)) => args,
        Ok(Command::Help) => {
            let _ = writeln!(out, "{}", usage());
            return 0;
        }
        Err(message) => {
            let _ = writeln!(err, "{message}\n{}", usage());
            return EXIT_USAGE;
        }
    };

    match run(&args, settings, out) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    // stdout carries the result; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let code = execute(
        env::args().skip(1),
        &Settings::from_env(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mro_forecast::Forecast;
    use tempfile::tempdir;

    fn argv(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn invoke(items: &[&str], settings: &Settings) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(argv(items), settings, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).expect("utf8 stdout"),
            String::from_utf8(err).expect("utf8 stderr"),
        )
    }

    #[test]
    fn test_defaults_print_default_forecast() {
        let (code, out, err) = invoke(&[], &Settings::default());
        assert_eq!(code, 0, "stderr: {err}");
        assert_eq!(out, "11.8 days\n");
    }

    #[test]
    fn test_all_flags_parsed() {
        let parsed = parse_args(argv(&[
            "--age", "20", "--cycles", "350", "--hours", "1200", "--util", "3.5", "--region",
            "USA", "--breakdown",
        ]))
        .expect("parse");
        assert_eq!(
            parsed,
            Command::Predict(Args {
                age: 20,
                cycles: 350.0,
                hours: 1200.0,
                util: 3.5,
                region: "USA".to_string(),
                breakdown: true,
                json: false,
            })
        );
    }

    #[test]
    fn test_breakdown_lists_every_term() {
        let (code, out, _) = invoke(&["--breakdown"], &Settings::default());
        assert_eq!(code, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "11.8 days");
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().any(|l| l.contains("ln(cycles)")));
        assert!(lines.iter().any(|l| l.contains("Region offset")));
    }

    #[test]
    fn test_json_output_is_full_forecast() {
        let (code, out, _) = invoke(&["--json", "--region", "Middle East"], &Settings::default());
        assert_eq!(code, 0);
        let forecast: Forecast = serde_json::from_str(&out).expect("json forecast");
        assert_eq!(forecast.profile.region, Region::MiddleEast);
        assert!((forecast.days - (11.816_988_262_956 - 21.4115)).abs() < 1e-6);
        assert_eq!(forecast.terms.len(), 9);
    }

    #[test]
    fn test_unknown_region_exits_one() {
        let (code, out, err) = invoke(&["--region", "Europe"], &Settings::default());
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("Europe"));
    }

    #[test]
    fn test_unusable_table_exits_one() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").expect("write");
        let settings = Settings {
            coefficients_path: Some(path),
            ..Default::default()
        };

        let (code, out, err) = invoke(&[], &settings);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert!(err.contains("Failed to load coefficients"));
    }

    #[test]
    fn test_bad_arguments_exit_two() {
        for items in [
            &["--frobnicate"][..],
            &["--age"][..],
            &["--age", "-3"][..],
            &["--cycles", "lots"][..],
            &["--region"][..],
        ] {
            let (code, out, err) = invoke(items, &Settings::default());
            assert_eq!(code, EXIT_USAGE, "{items:?}");
            assert!(out.is_empty());
            assert!(err.contains("Usage: mro_predict"));
        }
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        for items in [
            &["--cycles", "NaN"][..],
            &["--hours", "-inf"][..],
            &["--util", "inf"][..],
        ] {
            let (code, out, err) = invoke(items, &Settings::default());
            assert_eq!(code, EXIT_USAGE, "{items:?}");
            assert!(out.is_empty(), "{items:?} printed {out}");
            assert!(err.contains("finite"));
        }
    }

    #[test]
    fn test_out_of_range_finite_values_extrapolate() {
        let (code, out, _) = invoke(&["--age", "45", "--util", "-2"], &Settings::default());
        assert_eq!(code, 0);
        assert!(out.ends_with(" days\n"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (code, out, err) = invoke(&["--help"], &Settings::default());
        assert_eq!(code, 0);
        assert!(out.starts_with("Usage: mro_predict"));
        assert!(err.is_empty());
    }
}
