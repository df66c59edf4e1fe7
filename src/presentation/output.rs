//! Output Rendering
//!
//! Renders the final pipeline outcome and the recipe listing. One line on
//! stdout in text mode (`sandwich: <value-or-error>`), or a JSON object for
//! scripting.

use crate::application::{MakeOutcome, RecipeBook};
use crate::domain::entities::Ready;
use crate::domain::pipeline::KitchenError;
use crate::domain::value_objects::{Bread, Component, Ingredient};
use is_terminal::IsTerminal;
use serde::Serialize;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Text renderer for pipeline outcomes
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Whether to use ANSI colors
    pub color: bool,
}

impl TextRenderer {
    /// Color on only when stdout is a terminal
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Render the terminal `sandwich:` line
    pub fn render_outcome(&self, outcome: &MakeOutcome) -> String {
        match &outcome.result {
            Ok(ready) => format!("sandwich: {}", self.paint(&ready.to_string(), "32")),
            Err(error) => format!("sandwich: {}", self.paint(&error.to_string(), "31")),
        }
    }

    /// Render the recipe listing, one recipe per line
    pub fn render_recipes(&self, book: &RecipeBook) -> String {
        let mut lines = Vec::new();
        for recipe in book.iter() {
            lines.push(format!("{:<12} {}", recipe.name(), recipe.description()));
        }
        lines.join("\n")
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

/// Serializable view of a finished sandwich
#[derive(Debug, Serialize)]
struct ReadyView {
    bottom: Bread,
    components: Vec<Component>,
    top: Option<Bread>,
}

impl From<&Ready> for ReadyView {
    fn from(ready: &Ready) -> Self {
        Self {
            bottom: ready.bottom(),
            components: ready.components().to_vec(),
            top: ready.top(),
        }
    }
}

/// Serializable view of a pipeline failure
#[derive(Debug, Serialize)]
struct ErrorView {
    kind: &'static str,
    ingredient: Ingredient,
    message: String,
}

impl From<&KitchenError> for ErrorView {
    fn from(error: &KitchenError) -> Self {
        Self {
            kind: match error {
                KitchenError::NotFound { .. } => "not-found",
            },
            ingredient: error.ingredient(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct OutcomeView {
    recipe: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    sandwich: Option<ReadyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorView>,
}

/// Render the outcome as a JSON object
pub fn render_outcome_json(outcome: &MakeOutcome) -> String {
    let view = match &outcome.result {
        Ok(ready) => OutcomeView {
            recipe: outcome.recipe,
            ok: true,
            sandwich: Some(ReadyView::from(ready)),
            error: None,
        },
        Err(error) => OutcomeView {
            recipe: outcome.recipe,
            ok: false,
            sandwich: None,
            error: Some(ErrorView::from(error)),
        },
    };
    serde_json::to_string_pretty(&view).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Debug, Serialize)]
struct RecipeView {
    name: &'static str,
    description: &'static str,
}

/// Render the recipe listing as a JSON array
pub fn render_recipes_json(book: &RecipeBook) -> String {
    let views: Vec<RecipeView> = book
        .iter()
        .map(|recipe| RecipeView {
            name: recipe.name(),
            description: recipe.description(),
        })
        .collect();
    serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".to_string())
}
