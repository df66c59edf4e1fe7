//! Console event sink
//!
//! Writes one line per prep event to stderr, keeping stdout free for the
//! final `sandwich:` line.

use crate::domain::ports::{PrepEvent, PrepEventSink};
use std::io::Write;

/// Event sink that narrates assembly steps on stderr
#[derive(Debug, Default)]
pub struct ConsoleEventSink;

impl ConsoleEventSink {
    pub fn new() -> Self {
        Self
    }

    fn line(event: &PrepEvent) -> String {
        match event {
            PrepEvent::Started { bottom, first } => {
                format!("start: {} + {}", bottom, first)
            }
            PrepEvent::ComponentAdded { component } => format!("add: {}", component),
            PrepEvent::Finished { top } => match top {
                Some(bread) => format!("finish: top {}", bread),
                None => "finish: open-faced".to_string(),
            },
            PrepEvent::StepFailed { error } => format!("failed: {}", error),
        }
    }
}

impl PrepEventSink for ConsoleEventSink {
    fn on_event(&self, event: PrepEvent) {
        // Narration is best-effort; a closed stderr must not fail the pipeline.
        let _ = writeln!(std::io::stderr(), "{}", Self::line(&event));
    }
}
