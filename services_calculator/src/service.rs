//! Calculator service implementation

use crate::keymap::Keymap;
use crate::settings::CalculatorSettings;
use calc_core::{CalculatorEngine, EngineOutcome, Intent};
use input_types::{InputEvent, KeyEvent};
use thiserror::Error;
use tracing::{debug, trace, warn};
use view_types::{DisplayContent, DisplayError, DisplayFrame, DisplayId, DisplaySink};

/// Calculator service error
#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Display error: {0}")]
    Display(#[from] DisplayError),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("Unsupported settings version: {0}")]
    UnsupportedSettingsVersion(u32),
}

/// Calculator service result
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// What the service did with an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    /// Not calculator input (unmapped key, release, filtered repeat)
    Ignored,
    /// Intent applied but nothing to show (silent no-op)
    Unchanged,
    /// A frame with this revision was published
    Rendered { revision: u64 },
}

/// The calculator service
///
/// Owns one engine and publishes a frame to its sink for every intent that
/// produces display text.
pub struct CalculatorService<S: DisplaySink> {
    engine: CalculatorEngine,
    keymap: Keymap,
    settings: CalculatorSettings,
    display_id: DisplayId,
    revision: u64,
    last_frame: Option<DisplayFrame>,
    sink: S,
}

impl<S: DisplaySink> CalculatorService<S> {
    /// Create a service and publish the initial "0" frame
    pub fn new(settings: CalculatorSettings, sink: S) -> CalculatorResult<Self> {
        settings.validate()?;

        let mut service = Self {
            engine: CalculatorEngine::new(),
            keymap: Keymap::from_settings(&settings),
            settings,
            display_id: DisplayId::new(),
            revision: 0,
            last_frame: None,
            sink,
        };
        service.publish()?;
        Ok(service)
    }

    /// Create a service with default settings
    pub fn with_sink(sink: S) -> CalculatorResult<Self> {
        Self::new(CalculatorSettings::default(), sink)
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    pub fn display_id(&self) -> DisplayId {
        self.display_id
    }

    /// Revision of the most recently published frame
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_frame(&self) -> Option<&DisplayFrame> {
        self.last_frame.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the service, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Process an input event
    pub fn process_input(&mut self, event: &InputEvent) -> CalculatorResult<ServiceAction> {
        match event.as_key() {
            Some(key_event) => self.process_key(key_event),
            None => Ok(ServiceAction::Ignored),
        }
    }

    /// Process a key event
    pub fn process_key(&mut self, event: &KeyEvent) -> CalculatorResult<ServiceAction> {
        let accepted =
            event.is_pressed() || (event.is_repeat() && self.settings.accept_repeat);
        if !accepted {
            trace!(code = %event.code, state = %event.state, "key state ignored");
            return Ok(ServiceAction::Ignored);
        }

        match self.keymap.map_key(event) {
            Some(intent) => self.apply_intent(intent),
            None => {
                trace!(code = %event.code, modifiers = %event.modifiers, "unmapped key");
                Ok(ServiceAction::Ignored)
            }
        }
    }

    /// Apply an intent directly (button press)
    pub fn apply_intent(&mut self, intent: Intent) -> CalculatorResult<ServiceAction> {
        let outcome = self.engine.apply(intent);

        if let Some(err) = self.engine.last_error() {
            if err.shows_error() {
                warn!(intent = ?intent, error = %err, "calculation failed");
            } else {
                debug!(intent = ?intent, error = %err, "intent skipped");
            }
        }

        match outcome {
            EngineOutcome::Render(text) => {
                debug!(intent = ?intent, display = %text, "intent applied");
                let revision = self.publish()?;
                Ok(ServiceAction::Rendered { revision })
            }
            EngineOutcome::Unchanged => Ok(ServiceAction::Unchanged),
        }
    }

    /// Build the frame for the current engine state
    fn current_frame(&self, revision: u64) -> DisplayFrame {
        let entry = self.engine.entry();
        let content = if entry.is_error() {
            DisplayContent::error(entry.display_text())
        } else {
            DisplayContent::readout(entry.display_text())
        };

        let frame = DisplayFrame::new(self.display_id, revision, content);
        match self.engine.pending_operator() {
            Some(op) => frame.with_annunciator(op.symbol()),
            None => frame,
        }
    }

    /// The revision only advances once the sink has accepted the frame
    fn publish(&mut self) -> CalculatorResult<u64> {
        let revision = self.revision + 1;
        let frame = self.current_frame(revision);
        self.sink.render(&frame)?;
        self.revision = revision;
        self.last_frame = Some(frame);
        Ok(revision)
    }
}
