//! # Text Renderer Host
//!
//! Plain-text host for the calculator service.
//!
//! ## Philosophy
//!
//! - **Rendering is a host concern**, not a component concern
//! - **Components never print** - the service publishes frames, the host writes them
//! - **Renderer is dumb and replaceable** - no calculator logic lives here
//! - **Renderer is NOT a terminal** - no ANSI, no cursor addressing, no terminal state
//!
//! ## Responsibilities
//!
//! - Write one line per display frame to any `io::Write`
//! - Skip frames that are not newer than the last one written
//! - Translate typed bytes into key events for the service
//! - Choose the log filter for host binaries

pub mod logging;
pub mod translate;

pub use logging::{log_filter, DEFAULT_LOG_FILTER};
pub use translate::{byte_to_key_event, line_to_events};

use std::io::Write;
use view_types::{DisplayError, DisplayFrame, DisplaySink};

/// Rendering statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames written
    pub frames_rendered: usize,
    /// Frames dropped because their revision was not newer
    pub frames_skipped: usize,
    /// Characters written across all frames
    pub chars_written: usize,
}

/// Text renderer writing display frames as single lines
///
/// A frame is written as `[A TEXT]`, where `A` is the pending-operator
/// annunciator (or a space) and `TEXT` is right-aligned to the display width.
/// Text wider than the display is written in full.
pub struct TextRenderer<W: Write> {
    out: W,
    width: usize,
    /// Last rendered revision (to detect changes)
    last_revision: Option<u64>,
    stats: RenderStats,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            last_revision: None,
            stats: RenderStats::default(),
        }
    }

    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Checks if a frame is newer than the last one written
    pub fn needs_redraw(&self, frame: &DisplayFrame) -> bool {
        self.last_revision
            .map_or(true, |last| frame.revision > last)
    }

    /// Format a frame as one line (without the newline)
    pub fn format_frame(&self, frame: &DisplayFrame) -> String {
        let annunciator = frame.annunciator.as_deref().unwrap_or(" ");
        format!(
            "[{} {:>width$}]",
            annunciator,
            frame.text(),
            width = self.width
        )
    }
}

impl<W: Write> DisplaySink for TextRenderer<W> {
    fn render(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError> {
        if !self.needs_redraw(frame) {
            self.stats.frames_skipped += 1;
            return Ok(());
        }

        let line = self.format_frame(frame);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;

        self.last_revision = Some(frame.revision);
        self.stats.frames_rendered += 1;
        self.stats.chars_written += line.chars().count() + 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_types::{DisplayContent, DisplayId};

    fn frame(revision: u64, text: &str) -> DisplayFrame {
        DisplayFrame::new(DisplayId::new(), revision, DisplayContent::readout(text))
    }

    fn output(renderer: TextRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_format_right_aligned() {
        let renderer = TextRenderer::new(Vec::new(), 6);
        assert_eq!(renderer.format_frame(&frame(1, "42")), "[      42]");
    }

    #[test]
    fn test_format_with_annunciator() {
        let renderer = TextRenderer::new(Vec::new(), 4);
        let frame = frame(1, "8").with_annunciator("/");
        assert_eq!(renderer.format_frame(&frame), "[/    8]");
    }

    #[test]
    fn test_format_overwide_text_kept() {
        let renderer = TextRenderer::new(Vec::new(), 3);
        assert_eq!(renderer.format_frame(&frame(1, "123456")), "[  123456]");
    }

    #[test]
    fn test_render_writes_lines() {
        let mut renderer = TextRenderer::new(Vec::new(), 3);
        renderer.render(&frame(1, "0")).unwrap();
        renderer.render(&frame(2, "12")).unwrap();

        assert_eq!(renderer.stats().frames_rendered, 2);
        assert_eq!(output(renderer), "[    0]\n[   12]\n");
    }

    #[test]
    fn test_stale_frame_skipped() {
        let mut renderer = TextRenderer::new(Vec::new(), 3);
        renderer.render(&frame(2, "7")).unwrap();
        renderer.render(&frame(2, "8")).unwrap();
        renderer.render(&frame(1, "9")).unwrap();

        assert_eq!(renderer.stats().frames_rendered, 1);
        assert_eq!(renderer.stats().frames_skipped, 2);
        assert_eq!(output(renderer), "[    7]\n");
    }

    #[test]
    fn test_needs_redraw() {
        let mut renderer = TextRenderer::new(Vec::new(), 3);
        assert!(renderer.needs_redraw(&frame(1, "0")));
        renderer.render(&frame(1, "0")).unwrap();
        assert!(!renderer.needs_redraw(&frame(1, "0")));
        assert!(renderer.needs_redraw(&frame(2, "0")));
    }

    #[test]
    fn test_chars_written() {
        let mut renderer = TextRenderer::new(Vec::new(), 2);
        renderer.render(&frame(1, "5")).unwrap();
        // "[   5]" plus newline
        assert_eq!(renderer.stats().chars_written, 7);
    }

    #[test]
    fn test_chars_written_counts_characters() {
        let mut renderer = TextRenderer::new(Vec::new(), 1);
        let frame = frame(1, "5").with_annunciator("\u{00f7}");
        renderer.render(&frame).unwrap();
        // "[÷ 5]" is five characters but six bytes
        assert_eq!(renderer.stats().chars_written, 6);
        assert_eq!(output(renderer).len(), 7);
    }
}
