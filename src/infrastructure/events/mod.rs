//! Prep event sinks

pub mod console;

pub use console::ConsoleEventSink;
