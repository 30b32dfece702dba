//! CalculatorEngine state machine
//!
//! Folds intents into a running computation with single-operation memory:
//! one pending operand and one pending operator. Operators chain left to
//! right with no precedence.

use crate::{
    error::CalcError,
    intent::{Digit, Intent, Operator},
    snapshot::EngineSnapshot,
    value::{format_number, Entry},
};

/// Outcome from applying an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    /// Show this text
    Render(String),
    /// Silent no-op; the display keeps what it shows
    Unchanged,
}

impl EngineOutcome {
    /// Text to render, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            EngineOutcome::Render(text) => Some(text),
            EngineOutcome::Unchanged => None,
        }
    }
}

/// Operand and operator captured by an operator intent
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOperation {
    operand: Entry,
    operator: Operator,
}

/// Calculator engine
///
/// Owns the readout, the pending operation and the reset flag. All intents
/// are total: they mutate state and report what to render, never fail.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    entry: Entry,
    pending: Option<PendingOperation>,
    /// Next digit starts a new entry instead of extending the current one
    reset_flag: bool,
    last_error: Option<CalcError>,
}

impl CalculatorEngine {
    /// Create an engine showing "0"
    pub fn new() -> Self {
        Self {
            entry: Entry::zero(),
            pending: None,
            reset_flag: false,
            last_error: None,
        }
    }

    /// Apply an intent and return the outcome
    pub fn apply(&mut self, intent: Intent) -> EngineOutcome {
        match intent {
            Intent::Digit(digit) => self.digit(digit),
            Intent::DecimalPoint => self.decimal_point(),
            Intent::Operator(op) => self.operator(op),
            Intent::Equals => self.equals(),
            Intent::Percent => self.percent(),
            Intent::EraseLast => self.erase_last(),
            Intent::ClearAll => self.clear_all(),
        }
    }

    /// Apply a sequence of intents, returning the last outcome
    pub fn apply_all<I>(&mut self, intents: I) -> EngineOutcome
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .fold(EngineOutcome::Unchanged, |_, intent| self.apply(intent))
    }

    /// Get a complete snapshot of engine state (for parity testing)
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            entry: self.entry.clone(),
            pending_operand: self.pending.as_ref().map(|p| p.operand.clone()),
            pending_operator: self.pending.as_ref().map(|p| p.operator),
            reset_flag: self.reset_flag,
        }
    }

    // Public accessors for rendering/testing

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn display_text(&self) -> &str {
        self.entry.display_text()
    }

    pub fn pending_operand(&self) -> Option<&Entry> {
        self.pending.as_ref().map(|p| &p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn reset_flag(&self) -> bool {
        self.reset_flag
    }

    /// Classification of the failure during the most recent intent, if any
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    // Intents

    /// Type a numeral
    pub fn digit(&mut self, digit: Digit) -> EngineOutcome {
        self.last_error = None;
        let ch = digit.as_char();

        if !self.reset_flag {
            if let Entry::Number(text) = &mut self.entry {
                match text.as_str() {
                    "0" => {}
                    "-0" => {
                        text.pop();
                        text.push(ch);
                        return self.render();
                    }
                    _ => {
                        text.push(ch);
                        return self.render();
                    }
                }
            }
        }

        self.entry = Entry::Number(ch.to_string());
        self.reset_flag = false;
        self.render()
    }

    /// Type a decimal point
    pub fn decimal_point(&mut self) -> EngineOutcome {
        self.last_error = None;

        if self.reset_flag {
            self.entry = Entry::number("0.");
            self.reset_flag = false;
            return self.render();
        }

        match &mut self.entry {
            Entry::Number(text) => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            Entry::Error => self.entry = Entry::number("0."),
        }
        self.render()
    }

    /// Choose a binary operator
    ///
    /// When an operation is pending and a new operand has been typed since,
    /// the pending operation is folded first. Pressing operators back to back
    /// only replaces the pending operator.
    pub fn operator(&mut self, op: Operator) -> EngineOutcome {
        self.last_error = None;

        if self.pending.is_some() && !self.reset_flag {
            self.calculate();
        }

        self.pending = Some(PendingOperation {
            operand: self.entry.clone(),
            operator: op,
        });
        self.reset_flag = true;
        self.render()
    }

    /// Evaluate the pending operation
    pub fn equals(&mut self) -> EngineOutcome {
        self.last_error = None;
        self.calculate()
    }

    /// Divide the readout by 100, independent of any pending operation
    ///
    /// An unparsable readout (the error marker) makes this a no-op.
    pub fn percent(&mut self) -> EngineOutcome {
        self.last_error = None;

        let result = self
            .entry
            .value()
            .and_then(|value| format_number(value / 100.0));
        match result {
            Ok(text) => {
                self.entry = Entry::Number(text);
                self.render()
            }
            Err(err) => {
                self.last_error = Some(err);
                EngineOutcome::Unchanged
            }
        }
    }

    /// Drop the last typed character, flooring at "0"
    pub fn erase_last(&mut self) -> EngineOutcome {
        self.last_error = None;

        self.entry = match &self.entry {
            Entry::Number(text) if text.chars().count() > 1 => {
                let mut shortened = text.clone();
                shortened.pop();
                if shortened == "-" {
                    Entry::zero()
                } else {
                    Entry::Number(shortened)
                }
            }
            _ => Entry::zero(),
        };
        self.render()
    }

    /// Return to the initial state
    pub fn clear_all(&mut self) -> EngineOutcome {
        *self = Self::new();
        self.render()
    }

    // Private helpers

    /// Fold the pending operation into the readout
    fn calculate(&mut self) -> EngineOutcome {
        let Some(pending) = &self.pending else {
            return EngineOutcome::Unchanged;
        };

        let operands = pending
            .operand
            .value()
            .and_then(|previous| self.entry.value().map(|current| (previous, current)));
        let (previous, current) = match operands {
            Ok(operands) => operands,
            Err(err) => {
                self.last_error = Some(err);
                return EngineOutcome::Unchanged;
            }
        };

        self.entry = match pending
            .operator
            .apply(previous, current)
            .and_then(format_number)
        {
            Ok(text) => Entry::Number(text),
            Err(err) => {
                self.last_error = Some(err);
                Entry::Error
            }
        };
        self.pending = None;
        self.reset_flag = true;
        self.render()
    }

    fn render(&self) -> EngineOutcome {
        EngineOutcome::Render(self.entry.display_text().to_string())
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
