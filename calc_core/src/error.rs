//! Calculation error taxonomy

use thiserror::Error;

/// Why a calculation could not produce a number
///
/// None of these are fatal. `DivideByZero` and `Overflow` put the engine into
/// the error readout; `InvalidParse` turns the intent into a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivideByZero,

    #[error("result is not a finite number")]
    Overflow,

    #[error("not a number: {0:?}")]
    InvalidParse(String),
}

impl CalcError {
    /// Returns true if this error replaces the readout with the error marker
    pub fn shows_error(&self) -> bool {
        matches!(self, CalcError::DivideByZero | CalcError::Overflow)
    }
}
