//! Typed bytes to key events
//!
//! Hosts reading a byte stream (a pipe, a line-buffered console) translate it
//! here into the key events a keyboard would have produced on a US layout.
//! Every printable byte carries its character as `text`.

use input_types::{InputEvent, KeyCode, KeyEvent, Modifiers};

/// Translate one ASCII byte
///
/// Returns `None` for control bytes with no key equivalent and for non-ASCII
/// bytes.
pub fn byte_to_key_event(byte: u8) -> Option<KeyEvent> {
    let (code, modifiers) = match byte {
        0x1B => return Some(plain(KeyCode::Escape)),
        0x08 | 0x7F => return Some(plain(KeyCode::Backspace)),
        b'\r' | b'\n' => return Some(plain(KeyCode::Enter)),
        b'\t' => return Some(plain(KeyCode::Tab)),
        b'0'..=b'9' => (KeyCode::from_digit(byte - b'0')?, Modifiers::none()),
        b'a'..=b'z' => (KeyCode::from_letter(byte as char)?, Modifiers::none()),
        b'A'..=b'Z' => (KeyCode::from_letter(byte as char)?, Modifiers::SHIFT),
        b' ' => (KeyCode::Space, Modifiers::none()),
        b'+' => (KeyCode::Equal, Modifiers::SHIFT),
        b'=' => (KeyCode::Equal, Modifiers::none()),
        b'*' => (KeyCode::Num8, Modifiers::SHIFT),
        b'%' => (KeyCode::Num5, Modifiers::SHIFT),
        b'-' => (KeyCode::Minus, Modifiers::none()),
        b'.' => (KeyCode::Period, Modifiers::none()),
        b',' => (KeyCode::Comma, Modifiers::none()),
        b'/' => (KeyCode::Slash, Modifiers::none()),
        0x20..=0x7E => (KeyCode::Unknown, Modifiers::none()),
        _ => return None,
    };

    Some(KeyEvent::pressed(code, modifiers).with_text((byte as char).to_string()))
}

/// Translate a line of typed text into key press events
///
/// Non-ASCII characters become `Unknown` keys carrying their text.
pub fn line_to_events(line: &str) -> Vec<InputEvent> {
    line.chars()
        .filter_map(|ch| {
            if ch.is_ascii() {
                byte_to_key_event(ch as u8)
            } else {
                Some(plain(KeyCode::Unknown).with_text(ch.to_string()))
            }
        })
        .map(InputEvent::key)
        .collect()
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::pressed(code, Modifiers::none())
}
