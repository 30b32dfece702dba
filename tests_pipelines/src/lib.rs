//! # Pipeline Integration Tests
//!
//! End-to-end tests for the keyboard => intent => engine => display pipeline.
//!
//! ## Test Philosophy
//!
//! - **Through the front door**: Inputs enter as key events, outputs leave as frames
//! - **Recorded output**: A `FrameRecorder` sink captures every published frame
//! - **Deterministic**: Same key trace => same frames and same engine snapshot

use input_types::InputEvent;
use services_calculator::{CalculatorResult, CalculatorService, CalculatorSettings};
use text_renderer_host::line_to_events;
use view_types::FrameRecorder;

/// Service with default settings publishing into a recorder
pub fn recording_service() -> CalculatorService<FrameRecorder> {
    recording_service_with(CalculatorSettings::default())
}

pub fn recording_service_with(settings: CalculatorSettings) -> CalculatorService<FrameRecorder> {
    CalculatorService::new(settings, FrameRecorder::new())
        .expect("recorder sink accepts the initial frame")
}

/// Feed typed text through byte translation into the service
pub fn type_text(
    service: &mut CalculatorService<FrameRecorder>,
    text: &str,
) -> CalculatorResult<()> {
    feed(service, line_to_events(text))
}

/// Feed events into the service
pub fn feed<I>(service: &mut CalculatorService<FrameRecorder>, events: I) -> CalculatorResult<()>
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        service.process_input(&event)?;
    }
    Ok(())
}

/// Text currently shown
pub fn shown(service: &CalculatorService<FrameRecorder>) -> &str {
    service
        .last_frame()
        .map(|frame| frame.text())
        .unwrap_or_default()
}
