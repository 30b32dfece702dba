//! # Calculator Service
//!
//! Connects keyboard input and button presses to the calculator engine and
//! publishes what the engine shows as display frames.
//!
//! ## Philosophy
//!
//! - **Typed input**: Keys arrive as `KeyEvent`s and become `Intent`s through a pure keymap
//! - **Components never print**: Output leaves only as frames handed to a `DisplaySink`
//! - **Testable**: Fully testable with injected key events and a recording sink
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An expression evaluator
//! - A persistent calculator (state lives only as long as the service)
//!
//! ## Design
//!
//! - `keymap`: key event / character => intent lookup
//! - `settings`: typed settings with baked-in defaults, optionally read from JSON
//! - `service`: the `CalculatorService` that owns the engine and the sink

pub mod keymap;
pub mod service;
pub mod settings;

pub use keymap::Keymap;
pub use service::{CalculatorError, CalculatorResult, CalculatorService, ServiceAction};
pub use settings::CalculatorSettings;
