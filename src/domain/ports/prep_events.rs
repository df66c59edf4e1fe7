//! Prep Event Port
//!
//! Provides an observable interface for sandwich assembly. Interpreters that
//! want to narrate their steps emit these; interpreters that don't wire the
//! no-op sink. Execution is strictly sequential, so emission order matches
//! step order.

use crate::domain::pipeline::KitchenError;
use crate::domain::value_objects::{Bread, Component};

/// Event emitted by an interpreter during assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrepEvent {
    /// A new sandwich was started
    Started { bottom: Bread, first: Component },

    /// A component was stacked onto the body
    ComponentAdded { component: Component },

    /// The sandwich was finished
    Finished { top: Option<Bread> },

    /// A step failed; the failure now rides the pipeline
    StepFailed { error: KitchenError },
}

/// Trait for receiving prep events
///
/// Implementations can be:
/// - ConsoleEventSink: step narration on stderr
/// - NoopEventSink: silent operation
/// - recording sinks in tests
pub trait PrepEventSink: Send + Sync {
    /// Handle a prep event
    fn on_event(&self, event: PrepEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PrepEventSink for NoopEventSink {
    fn on_event(&self, _event: PrepEvent) {
        // Do nothing
    }
}
