use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod input;
mod json_types;

#[derive(Parser, Debug)]
#[command(
    name = "polyrec",
    version,
    about = "Recover polynomial coefficients from base-encoded log samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fit a polynomial to the samples in a testcase file
    Fit(commands::fit::FitArgs),

    /// JSON output variant of fit, for scripting
    #[command(name = "fit-json", hide = true)]
    FitJson(commands::fit_json::FitJsonArgs),
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Command::Fit(args) => match commands::fit::run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
        Command::FitJson(args) => {
            commands::fit_json::run(args);
            ExitCode::SUCCESS
        }
    }
}
