#![no_std]

//! # Input Types
//!
//! Keyboard event types consumed by the calculator service.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input is structured events, not raw scan codes or byte streams
//! - **Layout-aware text**: Hosts that know the produced character attach it as `text`
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes
//! - A terminal line discipline
//! - Pointer or touch input

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Input event
///
/// Represents a single input event from any input device.
/// Only the keyboard is modelled; on-screen buttons bypass events entirely
/// and submit intents directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Keyboard event
    Key(KeyEvent),
}

impl InputEvent {
    /// Creates a key event
    pub fn key(event: KeyEvent) -> Self {
        Self::Key(event)
    }

    /// Returns true if this is a key event
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns the key event if this is a key event
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

/// Keyboard event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The logical key
    pub code: KeyCode,
    /// Modifier keys that were active
    pub modifiers: Modifiers,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
    /// Character produced by the key under the host's layout, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, modifiers: Modifiers, state: KeyState) -> Self {
        Self {
            code,
            modifiers,
            state,
            text: None,
        }
    }

    /// Creates a key pressed event
    pub fn pressed(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Pressed)
    }

    /// Creates a key released event
    pub fn released(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Released)
    }

    /// Creates a key repeat event
    pub fn repeat(code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(code, modifiers, KeyState::Repeat)
    }

    /// Attaches the produced character
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns the produced character if `text` holds exactly one
    pub fn text_char(&self) -> Option<char> {
        let text = self.text.as_deref()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }

    pub fn is_released(&self) -> bool {
        self.state == KeyState::Released
    }

    pub fn is_repeat(&self) -> bool {
        self.state == KeyState::Repeat
    }
}

/// Key state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Key code
///
/// Logical key codes on a US layout. Shifted symbols (`+`, `*`, `%`) are
/// expressed as the unshifted key plus `Modifiers::SHIFT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Number row
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    // Special keys
    Escape,
    Tab,
    Space,
    Enter,
    Backspace,
    Delete,

    // Punctuation
    Minus,
    Equal,
    Comma,
    Period,
    Slash,

    // Numpad
    NumpadDivide,
    NumpadMultiply,
    NumpadMinus,
    NumpadPlus,
    NumpadEnter,
    NumpadPeriod,
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,

    // Unknown/unmapped key
    Unknown,
}

impl KeyCode {
    /// Returns the digit value for number-row and numpad digit keys
    pub fn digit_value(&self) -> Option<u8> {
        match self {
            KeyCode::Num0 | KeyCode::Numpad0 => Some(0),
            KeyCode::Num1 | KeyCode::Numpad1 => Some(1),
            KeyCode::Num2 | KeyCode::Numpad2 => Some(2),
            KeyCode::Num3 | KeyCode::Numpad3 => Some(3),
            KeyCode::Num4 | KeyCode::Numpad4 => Some(4),
            KeyCode::Num5 | KeyCode::Numpad5 => Some(5),
            KeyCode::Num6 | KeyCode::Numpad6 => Some(6),
            KeyCode::Num7 | KeyCode::Numpad7 => Some(7),
            KeyCode::Num8 | KeyCode::Numpad8 => Some(8),
            KeyCode::Num9 | KeyCode::Numpad9 => Some(9),
            _ => None,
        }
    }

    /// Returns true for keys on the numeric keypad
    pub fn is_numpad(&self) -> bool {
        matches!(
            self,
            KeyCode::NumpadDivide
                | KeyCode::NumpadMultiply
                | KeyCode::NumpadMinus
                | KeyCode::NumpadPlus
                | KeyCode::NumpadEnter
                | KeyCode::NumpadPeriod
                | KeyCode::Numpad0
                | KeyCode::Numpad1
                | KeyCode::Numpad2
                | KeyCode::Numpad3
                | KeyCode::Numpad4
                | KeyCode::Numpad5
                | KeyCode::Numpad6
                | KeyCode::Numpad7
                | KeyCode::Numpad8
                | KeyCode::Numpad9
        )
    }

    /// Returns the letter key for an ASCII letter (either case)
    pub fn from_letter(ch: char) -> Option<Self> {
        const LETTERS: [KeyCode; 26] = [
            KeyCode::A,
            KeyCode::B,
            KeyCode::C,
            KeyCode::D,
            KeyCode::E,
            KeyCode::F,
            KeyCode::G,
            KeyCode::H,
            KeyCode::I,
            KeyCode::J,
            KeyCode::K,
            KeyCode::L,
            KeyCode::M,
            KeyCode::N,
            KeyCode::O,
            KeyCode::P,
            KeyCode::Q,
            KeyCode::R,
            KeyCode::S,
            KeyCode::T,
            KeyCode::U,
            KeyCode::V,
            KeyCode::W,
            KeyCode::X,
            KeyCode::Y,
            KeyCode::Z,
        ];

        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let index = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(LETTERS[index])
    }

    /// Returns the number-row key for a digit 0-9
    pub fn from_digit(value: u8) -> Option<Self> {
        match value {
            0 => Some(KeyCode::Num0),
            1 => Some(KeyCode::Num1),
            2 => Some(KeyCode::Num2),
            3 => Some(KeyCode::Num3),
            4 => Some(KeyCode::Num4),
            5 => Some(KeyCode::Num5),
            6 => Some(KeyCode::Num6),
            7 => Some(KeyCode::Num7),
            8 => Some(KeyCode::Num8),
            9 => Some(KeyCode::Num9),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self { bits: 0 };
    /// Control key
    pub const CTRL: Self = Self { bits: 1 << 0 };
    /// Alt key
    pub const ALT: Self = Self { bits: 1 << 1 };
    /// Shift key
    pub const SHIFT: Self = Self { bits: 1 << 2 };
    /// Meta/Super/Windows key
    pub const META: Self = Self { bits: 1 << 3 };

    pub fn none() -> Self {
        Self::NONE
    }

    pub fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Adds a modifier
    pub fn with(mut self, other: Modifiers) -> Self {
        self.bits |= other.bits;
        self
    }

    /// Checks if a modifier is present
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn is_meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns true when Ctrl, Alt or Meta is held (Shift alone is a plain chord)
    pub fn has_command_modifier(&self) -> bool {
        self.is_ctrl() || self.is_alt() || self.is_meta()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }

        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}
