//! Fit pipeline: feeds base-encoded samples through the numeric kernel and
//! recovers polynomial coefficients.
//!
//! Data flow: raw `(base, digits)` samples → decode → log transform →
//! y-samples (input order fixes the implicit x = 1..K) → Vandermonde solve →
//! coefficient vector. All failure modes are surfaced as [`EngineError`]
//! values; nothing here prints or exits.

pub mod error;
pub mod options;
pub mod pipeline;
pub mod sample;

pub use error::EngineError;
pub use options::FitOptions;
pub use pipeline::{collect_samples, collect_samples_lossy, fit, run, FitReport, RejectedSample};
pub use polyrec_math::MathError;
pub use sample::{Sample, SampleLog};
