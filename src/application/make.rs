//! Make use case
//!
//! Resolves one recipe out of the book (by name, or the deterministic first),
//! runs it against the chosen Technology, and hands the outcome back for the
//! presentation layer to render. A failed pipeline is a normal outcome here,
//! not a use-case error; only selection itself can fail.

use crate::application::recipes::RecipeBook;
use crate::domain::entities::Ready;
use crate::domain::pipeline::KitchenResult;
use crate::domain::ports::Technology;
use thiserror::Error;

/// Error selecting a recipe to run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MakeError {
    /// The requested recipe is not registered
    #[error("unknown recipe '{name}'")]
    UnknownRecipe { name: String },

    /// The recipe book holds no recipes at all
    #[error("no recipes registered")]
    EmptyBook,
}

/// Outcome of running a recipe
#[derive(Debug)]
pub struct MakeOutcome {
    /// Name of the recipe that ran
    pub recipe: &'static str,
    /// The pipeline's single terminal result
    pub result: KitchenResult<Ready>,
}

/// Use case: pick a recipe, run it against a Technology
#[derive(Debug, Clone, Default)]
pub struct MakeUseCase {
    book: RecipeBook,
}

impl MakeUseCase {
    /// Create the use case over a recipe book
    pub fn new(book: RecipeBook) -> Self {
        Self { book }
    }

    /// The recipe book this use case selects from
    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    /// Run `recipe` (or the first registered one) against `tech`
    pub fn execute(
        &self,
        recipe: Option<&str>,
        tech: &Technology,
    ) -> Result<MakeOutcome, MakeError> {
        let selected = match recipe {
            Some(name) => self.book.get(name).ok_or_else(|| MakeError::UnknownRecipe {
                name: name.to_string(),
            })?,
            None => self.book.first().ok_or(MakeError::EmptyBook)?,
        };
        Ok(MakeOutcome {
            recipe: selected.name(),
            result: selected.run(tech),
        })
    }
}
