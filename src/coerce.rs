//! Numeric coercion of resolved cell text.

use crate::error::{Error, Result};

/// Parse cell text as a float. Empty text is `0.0`.
///
/// Surrounding whitespace is ignored, but text made only of whitespace is
/// not a number. `reference` is only used to label the error.
pub fn to_float(text: &str, reference: &str) -> Result<f64> {
    if text.is_empty() {
        return Ok(0.0);
    }

    // inf/NaN parse fine but have no JSON representation
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Format {
            reference: reference.to_string(),
            value: text.to_string(),
        }),
    }
}

/// Parse cell text as an integer age, truncating toward zero.
///
/// Goes through [`to_float`] first so `"24.0"` yields `24`.
pub fn to_int(text: &str, reference: &str) -> Result<i64> {
    Ok(to_float(text, reference)?.trunc() as i64)
}
