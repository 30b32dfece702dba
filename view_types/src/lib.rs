//! # View Types
//!
//! Display frames published by the calculator service and the sink trait that
//! hosts implement to show them.
//!
//! ## Philosophy
//!
//! - **Frames, not streams**: Output is an immutable frame per update, replaced by revision
//! - **Dumb sinks**: A sink shows what it is given and holds no calculator logic
//! - **Testable**: Frames are serializable and can be recorded and compared
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - ANSI/VT terminal emulation
//! - A layout or styling system

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayId(Uuid);

impl DisplayId {
    /// Creates a new unique display ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DisplayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display:{}", self.0)
    }
}

/// What the readout shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayContent {
    /// A number, either being typed or just computed
    Readout { text: String },
    /// The error marker after a failed calculation
    Error { text: String },
}

impl DisplayContent {
    pub fn readout(text: impl Into<String>) -> Self {
        DisplayContent::Readout { text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        DisplayContent::Error { text: text.into() }
    }

    /// Text to put on screen
    pub fn text(&self) -> &str {
        match self {
            DisplayContent::Readout { text } | DisplayContent::Error { text } => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DisplayContent::Error { .. })
    }
}

/// Display frame - immutable snapshot of what the display shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFrame {
    /// Display this frame belongs to
    pub display_id: DisplayId,
    /// Monotonic revision number (must increase with each update)
    pub revision: u64,
    /// Readout content
    pub content: DisplayContent,
    /// Symbol of the pending operator, shown beside the readout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annunciator: Option<String>,
}

impl DisplayFrame {
    pub fn new(display_id: DisplayId, revision: u64, content: DisplayContent) -> Self {
        Self {
            display_id,
            revision,
            content,
            annunciator: None,
        }
    }

    /// Sets the pending-operator annunciator
    pub fn with_annunciator(mut self, symbol: impl Into<String>) -> Self {
        self.annunciator = Some(symbol.into());
        self
    }

    pub fn text(&self) -> &str {
        self.content.text()
    }

    /// Checks if this frame's revision is compatible (monotonic increase)
    pub fn is_valid_successor(&self, previous: &DisplayFrame) -> bool {
        self.display_id == previous.display_id && self.revision > previous.revision
    }
}

/// Display sink errors
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stale frame for {display_id}: revision {revision} does not follow {last}")]
    StaleRevision {
        display_id: DisplayId,
        revision: u64,
        last: u64,
    },
}

/// Render seam between the calculator and whatever shows its output
pub trait DisplaySink {
    /// Show a frame
    fn render(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError>;
}

/// Sink that keeps every frame it receives
///
/// Rejects frames that do not strictly follow the previous one, which makes it
/// suitable for asserting publication order in tests.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<DisplayFrame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[DisplayFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&DisplayFrame> {
        self.frames.last()
    }

    /// Text of every recorded frame, oldest first
    pub fn texts(&self) -> Vec<&str> {
        self.frames.iter().map(|frame| frame.text()).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl DisplaySink for FrameRecorder {
    fn render(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError> {
        if let Some(last) = self.frames.last() {
            if !frame.is_valid_successor(last) {
                return Err(DisplayError::StaleRevision {
                    display_id: frame.display_id,
                    revision: frame.revision,
                    last: last.revision,
                });
            }
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn render(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError> {
        (**self).render(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id_creation() {
        let id1 = DisplayId::new();
        let id2 = DisplayId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_display_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = DisplayId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
        assert!(id.to_string().starts_with("display:"));
    }

    #[test]
    fn test_content_text() {
        assert_eq!(DisplayContent::readout("12.5").text(), "12.5");
        assert_eq!(DisplayContent::error("Error").text(), "Error");
        assert!(DisplayContent::error("Error").is_error());
        assert!(!DisplayContent::readout("0").is_error());
    }

    #[test]
    fn test_frame_annunciator() {
        let frame = DisplayFrame::new(DisplayId::new(), 1, DisplayContent::readout("8"))
            .with_annunciator("+");
        assert_eq!(frame.annunciator.as_deref(), Some("+"));
        assert_eq!(frame.text(), "8");
    }

    #[test]
    fn test_frame_successor() {
        let id = DisplayId::new();
        let frame1 = DisplayFrame::new(id, 1, DisplayContent::readout("1"));
        let frame2 = DisplayFrame::new(id, 2, DisplayContent::readout("12"));
        let other = DisplayFrame::new(DisplayId::new(), 3, DisplayContent::readout("3"));

        assert!(frame2.is_valid_successor(&frame1));
        assert!(!frame1.is_valid_successor(&frame2));
        assert!(!other.is_valid_successor(&frame2));
    }

    #[test]
    fn test_recorder_accepts_monotonic_frames() {
        let id = DisplayId::new();
        let mut recorder = FrameRecorder::new();
        recorder
            .render(&DisplayFrame::new(id, 1, DisplayContent::readout("0")))
            .unwrap();
        recorder
            .render(&DisplayFrame::new(id, 2, DisplayContent::readout("7")))
            .unwrap();

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.texts(), vec!["0", "7"]);
        assert_eq!(recorder.last().map(|f| f.revision), Some(2));
    }

    #[test]
    fn test_recorder_rejects_stale_frame() {
        let id = DisplayId::new();
        let mut recorder = FrameRecorder::new();
        recorder
            .render(&DisplayFrame::new(id, 5, DisplayContent::readout("5")))
            .unwrap();

        let err = recorder
            .render(&DisplayFrame::new(id, 5, DisplayContent::readout("6")))
            .unwrap_err();
        assert!(matches!(
            err,
            DisplayError::StaleRevision {
                revision: 5,
                last: 5,
                ..
            }
        ));
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_boxed_sink() {
        let mut sink: Box<dyn DisplaySink> = Box::new(FrameRecorder::new());
        let frame = DisplayFrame::new(DisplayId::new(), 1, DisplayContent::readout("0"));
        assert!(sink.render(&frame).is_ok());
    }

    #[test]
    fn test_frame_serialization() {
        let frame = DisplayFrame::new(DisplayId::new(), 3, DisplayContent::error("Error"))
            .with_annunciator("÷");
        let json = serde_json::to_string(&frame).unwrap();
        let deserialized: DisplayFrame = serde_json::from_str(&json).unwrap();

        assert_eq!(frame, deserialized);
    }
}
