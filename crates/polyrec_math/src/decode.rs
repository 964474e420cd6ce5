//! Positional-notation decoding of digit strings.

use num_traits::Float;

use crate::error::MathError;

/// Map a single character to its digit value, case-insensitively.
/// `'0'..='9'` cover 0..=9, letters cover 10..=35.
fn digit_value(ch: char, base: u32) -> Result<u32, MathError> {
    let value = match ch {
        '0'..='9' => ch as u32 - '0' as u32,
        'a'..='z' => ch as u32 - 'a' as u32 + 10,
        'A'..='Z' => ch as u32 - 'A' as u32 + 10,
        _ => return Err(MathError::InvalidDigit { ch, base }),
    };
    if value >= base {
        return Err(MathError::InvalidDigit { ch, base });
    }
    Ok(value)
}

/// Decode `digits` as a number written in `base` (2..=36), most significant
/// digit first, via left-to-right Horner accumulation:
/// `acc = acc * base + digit`.
///
/// The result is a float, not an exact integer: once the magnitude exceeds
/// the mantissa's integral range (2^53 for `f64`) the low digits are lost.
/// Callers that feed the value into the log transform only need the
/// magnitude, so this is accepted rather than worked around.
///
/// An empty string decodes to zero, like a run of zero Horner steps.
pub fn decode_in_base<F: Float>(digits: &str, base: u32) -> Result<F, MathError> {
    if !(2..=36).contains(&base) {
        return Err(MathError::UnsupportedBase { base });
    }
    let base_f = F::from(base).ok_or(MathError::UnsupportedBase { base })?;

    let mut acc = F::zero();
    for ch in digits.chars() {
        let value = digit_value(ch, base)?;
        let value_f = F::from(value).ok_or(MathError::InvalidDigit { ch, base })?;
        acc = acc * base_f + value_f;
    }
    Ok(acc)
}
