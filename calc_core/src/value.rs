//! Readout values, operand parsing and result formatting

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// The readout value
///
/// Either a decimal literal (possibly partial, such as `"12."`) or the error
/// marker left behind by a failed calculation. The marker only becomes text
/// at the display boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entry {
    Number(String),
    Error,
}

impl Entry {
    /// Text shown for the error marker
    pub const ERROR_TEXT: &'static str = "Error";

    pub fn zero() -> Self {
        Entry::Number("0".into())
    }

    pub fn number(text: impl Into<String>) -> Self {
        Entry::Number(text.into())
    }

    /// Text for the display
    pub fn display_text(&self) -> &str {
        match self {
            Entry::Number(text) => text,
            Entry::Error => Self::ERROR_TEXT,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Entry::Error)
    }

    /// Numeric value of the entry
    pub fn value(&self) -> Result<f64, CalcError> {
        match self {
            Entry::Number(text) => parse_operand(text),
            Entry::Error => Err(CalcError::InvalidParse(Self::ERROR_TEXT.into())),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

/// Parse an operand literal
///
/// Accepts an optional leading `-`, ASCII digits and at most one `.`, with at
/// least one digit. Everything else (including `inf`, `NaN` and exponents) is
/// rejected, as is a literal too long to fit in a finite `f64`.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    let invalid = || CalcError::InvalidParse(text.into());
    let unsigned = text.strip_prefix('-').unwrap_or(text);

    let mut seen_point = false;
    let mut seen_digit = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return Err(invalid()),
        }
    }
    if !seen_digit {
        return Err(invalid());
    }

    let value = text.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value)
}

/// Format a result for the readout
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`. Non-finite values are an `Overflow`.
pub fn format_number(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Overflow);
    }
    if value == 0.0 {
        return Ok("0".into());
    }
    Ok(value.to_string())
}
