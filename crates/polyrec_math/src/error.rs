use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid digit '{ch}' for base {base}")]
    InvalidDigit { ch: char, base: u32 },
    #[error("Cannot take log base {base} of {value}")]
    InvalidLogInput { value: f64, base: u32 },
    #[error("Singular matrix: no usable pivot in column {pivot_col}")]
    SingularMatrix { pivot_col: usize },
    #[error("Dimension mismatch: {xs} x-values vs {ys} y-values")]
    DimensionMismatch { xs: usize, ys: usize },
    #[error("Unsupported base {base} (expected 2..=36)")]
    UnsupportedBase { base: u32 },
}
