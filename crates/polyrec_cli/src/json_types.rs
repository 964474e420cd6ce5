//! JSON output types for the non-interactive CLI API.
//!
//! Used by the fit-json subcommand to provide structured output suitable
//! for scripting and notebooks.

use serde::Serialize;

/// Result of a successful fit via fit-json
#[derive(Serialize, Debug)]
pub struct FitJsonOutput {
    pub ok: bool,
    pub input: String,

    /// Number of leading samples the fit consumed (K)
    pub points_used: usize,
    /// Degree of the fitted polynomial (K - 1)
    pub degree: usize,

    /// Per-sample transform records, in input order
    pub samples: Vec<SampleJson>,

    /// Coefficients, lowest degree first
    pub coefficients: Vec<f64>,

    /// Timing breakdown in microseconds
    pub timings_us: TimingsJson,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: None,
        }
    }

    pub fn with_input(error: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            input: Some(input.into()),
        }
    }
}

/// One transformed sample
#[derive(Serialize, Debug)]
pub struct SampleJson {
    pub base: u32,
    pub digits: String,
    pub log_value: f64,
}

/// Timing breakdown in microseconds
#[derive(Serialize, Debug, Default)]
pub struct TimingsJson {
    pub parse_us: u64,
    pub fit_us: u64,
    pub total_us: u64,
}
