//! # Calculator Console
//!
//! Reads typed keys from stdin a line at a time and prints the display after
//! every key that changes it. Line terminators are not keys: type `=` to
//! evaluate. A line containing only `q` exits.
//!
//! This is a HOST application, so it is allowed to print. Logs go to stderr
//! so they never interleave with display lines on stdout. `RUST_LOG` selects
//! the log level (warnings only by default).

use services_calculator::{CalculatorService, CalculatorSettings};
use std::env;
use std::io::{self, BufRead};
use text_renderer_host::{line_to_events, log_filter, TextRenderer};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .init();

    let settings = CalculatorSettings::default();
    let renderer = TextRenderer::new(io::stdout(), settings.display_width);
    let mut service = CalculatorService::new(settings, renderer)?;
    info!(display = %service.display_id(), "calculator started");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "q" {
            break;
        }

        for event in line_to_events(&line) {
            service.process_input(&event)?;
        }
    }

    let stats = service.sink().stats();
    info!(
        frames = stats.frames_rendered,
        skipped = stats.frames_skipped,
        "calculator stopped"
    );
    Ok(())
}
