//! fit-json subcommand handler.
//!
//! Runs the same pipeline as fit and emits a JSON envelope instead of
//! human-readable lines.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use crate::commands::resolve_options;
use crate::input;
use crate::json_types::{ErrorJsonOutput, FitJsonOutput, SampleJson, TimingsJson};

/// Arguments for the fit-json subcommand
#[derive(Args, Debug)]
pub struct FitJsonArgs {
    /// Path to the testcase file
    pub input: PathBuf,

    /// Points K to fit (polynomial degree K-1)
    #[arg(long)]
    pub points: Option<usize>,

    /// Decimal places (accepted for parity with fit; JSON numbers are
    /// emitted at full precision)
    #[arg(long)]
    pub precision: Option<usize>,
}

/// Run the fit-json command
pub fn run(args: FitJsonArgs) {
    match run_inner(&args) {
        Ok(output) => print_pretty_json(&output),
        Err(e) => {
            let err_output =
                ErrorJsonOutput::with_input(e.to_string(), args.input.display().to_string());
            print_pretty_json(&err_output);
        }
    }
}

fn run_inner(args: &FitJsonArgs) -> Result<FitJsonOutput> {
    let total_start = Instant::now();

    let parse_start = Instant::now();
    let testcase = input::read_test_case(&args.input)?;
    let parse_us = parse_start.elapsed().as_micros() as u64;

    let options = resolve_options(&testcase, args.points, args.precision);

    let fit_start = Instant::now();
    let report = polyrec_engine::run(&testcase.samples, &options)?;
    let fit_us = fit_start.elapsed().as_micros() as u64;

    let samples = report
        .sample_logs
        .iter()
        .map(|log| SampleJson {
            base: log.base,
            digits: log.digits.clone(),
            log_value: log.log_value,
        })
        .collect();

    Ok(FitJsonOutput {
        ok: true,
        input: args.input.display().to_string(),
        points_used: report.points_used,
        degree: report.degree(),
        samples,
        coefficients: report.coefficients,
        timings_us: TimingsJson {
            parse_us,
            fit_us,
            total_us: total_start.elapsed().as_micros() as u64,
        },
    })
}

fn print_pretty_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("JSON serialization error: {}", e);
            match serde_json::to_string(value) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("{{\"ok\":false,\"error\":\"JSON_SERIALIZATION_FAILED\"}}"),
            }
        }
    }
}
