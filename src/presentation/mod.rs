//! Presentation Layer
//!
//! Renders outcomes for the CLI driver.

pub mod output;

pub use output::{render_outcome_json, render_recipes_json, OutputFormat, TextRenderer};
