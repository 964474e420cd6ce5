//! Base-b logarithm of decoded values.

use num_traits::Float;

use crate::error::MathError;

/// Compute `log base b of value` as `ln(value) / ln(base)`.
///
/// `value <= 0` (or a non-finite value) and `base <= 1` have no real
/// logarithm; both are reported as [`MathError::InvalidLogInput`] instead of
/// letting NaN or infinity leak into the fit.
pub fn log_in_base<F: Float>(value: F, base: u32) -> Result<F, MathError> {
    if base <= 1 || value <= F::zero() || !value.is_finite() {
        return Err(MathError::InvalidLogInput {
            value: value.to_f64().unwrap_or(f64::NAN),
            base,
        });
    }
    let base_f = F::from(base).ok_or(MathError::InvalidLogInput {
        value: value.to_f64().unwrap_or(f64::NAN),
        base,
    })?;
    Ok(value.ln() / base_f.ln())
}
