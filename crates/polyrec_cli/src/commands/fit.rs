//! fit subcommand handler.
//!
//! Prints one line per transformed sample followed by the recovered
//! coefficients, lowest degree first.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::resolve_options;
use crate::input;

/// Arguments for the fit subcommand
#[derive(Args, Debug)]
pub struct FitArgs {
    /// Path to the testcase file
    pub input: PathBuf,

    /// Points K to fit (polynomial degree K-1); overrides polyrec.toml and
    /// the file's "k"
    #[arg(long)]
    pub points: Option<usize>,

    /// Decimal places in printed values
    #[arg(long)]
    pub precision: Option<usize>,
}

pub fn run(args: &FitArgs) -> Result<()> {
    let testcase = input::read_test_case(&args.input)
        .with_context(|| format!("Could not load {}", args.input.display()))?;
    let options = resolve_options(&testcase, args.points, args.precision);

    let report = polyrec_engine::run(&testcase.samples, &options)?;

    let prec = options.precision;
    for log in &report.sample_logs {
        println!(
            "log base {} of {} = {:.prec$}",
            log.base, log.digits, log.log_value
        );
    }

    println!();
    println!("Polynomial coefficients (lowest degree to highest):");
    for (i, coeff) in report.coefficients.iter().enumerate() {
        println!("a[{i}] = {coeff:.prec$}");
    }

    Ok(())
}
