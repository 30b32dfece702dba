//! # Calculator Core
//!
//! The calculator state machine shared by every host.
//!
//! ## Philosophy
//!
//! - **Deterministic**: Same intent trace => same engine state
//! - **Single-operation memory**: One pending operand, one pending operator, no precedence
//! - **Mechanism over policy**: The core produces display text, hosts decide how to show it
//! - **Total**: Every intent returns; failures become state, never panics
//!
//! ## Design
//!
//! The core provides:
//! - CalculatorEngine: State machine folding intents into a running computation
//! - Intent / Operator / Digit: Typed user actions
//! - Entry: Tagged readout value (number literal or error marker)
//! - EngineSnapshot: Deterministic state for parity testing

pub mod engine;
pub mod error;
pub mod intent;
pub mod snapshot;
pub mod value;

pub use engine::{CalculatorEngine, EngineOutcome};
pub use error::CalcError;
pub use intent::{Digit, Intent, Operator};
pub use snapshot::EngineSnapshot;
pub use value::{format_number, parse_operand, Entry};
