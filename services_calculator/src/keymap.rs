//! Key to intent lookup
//!
//! A pure table: no state, no side effects. Keys that carry Ctrl, Alt or Meta
//! are never calculator input. Unrecognized keys map to `None`.

use crate::settings::CalculatorSettings;
use calc_core::{Digit, Intent, Operator};
use input_types::{KeyCode, KeyEvent};

/// Key to intent table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    comma_decimal: bool,
    x_multiplies: bool,
}

impl Keymap {
    /// Table with every alias enabled
    pub fn new() -> Self {
        Self {
            comma_decimal: true,
            x_multiplies: true,
        }
    }

    pub fn from_settings(settings: &CalculatorSettings) -> Self {
        Self {
            comma_decimal: settings.comma_decimal,
            x_multiplies: settings.x_multiplies,
        }
    }

    /// Map a typed character
    pub fn map_char(&self, ch: char) -> Option<Intent> {
        if let Some(digit) = Digit::from_char(ch) {
            return Some(Intent::Digit(digit));
        }

        match ch {
            '.' => Some(Intent::DecimalPoint),
            ',' if self.comma_decimal => Some(Intent::DecimalPoint),
            '+' => Some(Intent::Operator(Operator::Add)),
            '-' => Some(Intent::Operator(Operator::Subtract)),
            '*' => Some(Intent::Operator(Operator::Multiply)),
            'x' | 'X' if self.x_multiplies => Some(Intent::Operator(Operator::Multiply)),
            '/' => Some(Intent::Operator(Operator::Divide)),
            '%' => Some(Intent::Percent),
            '=' => Some(Intent::Equals),
            'c' | 'C' => Some(Intent::ClearAll),
            _ => None,
        }
    }

    /// Map a key event
    ///
    /// Named keys win over attached text; attached text wins over the
    /// physical key, so hosts with other layouts can still report `+`.
    pub fn map_key(&self, event: &KeyEvent) -> Option<Intent> {
        if event.modifiers.has_command_modifier() {
            return None;
        }

        match event.code {
            KeyCode::Enter | KeyCode::NumpadEnter => return Some(Intent::Equals),
            KeyCode::Backspace | KeyCode::Delete => return Some(Intent::EraseLast),
            KeyCode::Escape => return Some(Intent::ClearAll),
            _ => {}
        }

        let ch = event
            .text_char()
            .or_else(|| physical_char(event.code, event.modifiers.is_shift()))?;
        self.map_char(ch)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Character a key produces on a US layout
fn physical_char(code: KeyCode, shift: bool) -> Option<char> {
    if code.is_numpad() {
        return match code {
            KeyCode::NumpadDivide => Some('/'),
            KeyCode::NumpadMultiply => Some('*'),
            KeyCode::NumpadMinus => Some('-'),
            KeyCode::NumpadPlus => Some('+'),
            KeyCode::NumpadPeriod => Some('.'),
            _ => code.digit_value().map(|value| (b'0' + value) as char),
        };
    }

    match (code, shift) {
        (KeyCode::Num5, true) => Some('%'),
        (KeyCode::Num8, true) => Some('*'),
        (KeyCode::Equal, true) => Some('+'),
        (KeyCode::Equal, false) => Some('='),
        (KeyCode::Minus, false) => Some('-'),
        (KeyCode::Period, false) => Some('.'),
        (KeyCode::Comma, false) => Some(','),
        (KeyCode::Slash, false) => Some('/'),
        (KeyCode::C, false) => Some('c'),
        (KeyCode::C, true) => Some('C'),
        (KeyCode::X, false) => Some('x'),
        (KeyCode::X, true) => Some('X'),
        (code, false) => code.digit_value().map(|value| (b'0' + value) as char),
        _ => None,
    }
}
