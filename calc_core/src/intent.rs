//! User intents

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single numeral 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("digit out of range: {}", value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Binary operator held as the pending operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown next to the readout while the operation is pending
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Apply to `previous` (left) and `current` (right)
    pub fn apply(&self, previous: f64, current: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(previous + current),
            Operator::Subtract => Ok(previous - current),
            Operator::Multiply => Ok(previous * current),
            Operator::Divide if current == 0.0 => Err(CalcError::DivideByZero),
            Operator::Divide => Ok(previous / current),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A user action handled atomically by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Percent,
    EraseLast,
    ClearAll,
}

impl Intent {
    /// Digit intent for 0-9
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Intent::Digit)
    }

    /// Short label, as printed on a button
    pub fn label(&self) -> String {
        match self {
            Intent::Digit(digit) => digit.to_string(),
            Intent::DecimalPoint => ".".into(),
            Intent::Operator(op) => op.symbol().into(),
            Intent::Equals => "=".into(),
            Intent::Percent => "%".into(),
            Intent::EraseLast => "DEL".into(),
            Intent::ClearAll => "C".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(|d| d.value()), Some(0));
        assert_eq!(Digit::new(9).map(|d| d.as_char()), Some('9'));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('7'), Digit::new(7));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('.'), None);
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(4.0, 2.5), Ok(10.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(8.0, 0.0), Err(CalcError::DivideByZero));
        assert_eq!(Operator::Divide.apply(8.0, -0.0), Err(CalcError::DivideByZero));
    }

    #[test]
    fn test_intent_labels() {
        assert_eq!(Intent::digit(4).unwrap().label(), "4");
        assert_eq!(Intent::Operator(Operator::Divide).label(), "/");
        assert_eq!(Intent::EraseLast.label(), "DEL");
        assert_eq!(Intent::digit(12), None);
    }

    #[test]
    fn test_digit_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Digit>("3").is_ok());
        assert!(serde_json::from_str::<Digit>("11").is_err());
    }
}
