use polyrec_math::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Sample {index}: {source}")]
    Sample {
        index: usize,
        #[source]
        source: MathError,
    },
    #[error("Solve failed: {0}")]
    Solve(#[from] MathError),
    #[error("Not enough samples: need {required}, have {available}")]
    InsufficientSamples { required: usize, available: usize },
}
