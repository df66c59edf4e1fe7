//! Pipeline failure type and the result-chaining combinators
//!
//! Domain failures travel *as values*: a failed [`KitchenResult`] is threaded
//! through the chained operation calls, never thrown. Two combinators do the
//! threading:
//!
//! - [`Chain::next`] short-circuits: on a failed input the operation is not
//!   invoked at all, not even for side effects.
//! - [`Chain::finish`] always invokes its operation, including on a failed
//!   input. The terminal operation is the one place a Body-typed failure can
//!   be adapted into the Ready-typed result, so it cannot be skipped.

use crate::domain::entities::{Body, Ready};
use crate::domain::value_objects::Ingredient;
use thiserror::Error;

/// Result type alias for pipeline steps
pub type KitchenResult<T> = Result<T, KitchenError>;

/// A domain failure carried through the pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitchenError {
    /// An ingredient was unavailable in storage
    #[error("ingredient not found: {ingredient}")]
    NotFound { ingredient: Ingredient },
}

impl KitchenError {
    /// Build a not-found failure for `ingredient`
    pub fn not_found(ingredient: impl Into<Ingredient>) -> Self {
        KitchenError::NotFound {
            ingredient: ingredient.into(),
        }
    }

    /// The ingredient this failure is about
    pub fn ingredient(&self) -> Ingredient {
        match self {
            KitchenError::NotFound { ingredient } => *ingredient,
        }
    }
}

/// Sequencing combinators over an in-progress sandwich result
///
/// Lets a recipe read as a left-to-right pipeline:
///
/// ```
/// # use sando::domain::entities::Ready;
/// # use sando::domain::pipeline::{Chain, KitchenResult};
/// # use sando::domain::value_objects::{Bread, Component};
/// # use sando::infrastructure::kitchens::quiet_kitchen;
/// # use sando::infrastructure::stores::InMemoryPantry;
/// # use std::sync::Arc;
/// # let tech = quiet_kitchen(Arc::new(InMemoryPantry::stocked())).unwrap();
/// let sandwich: KitchenResult<Ready> = tech
///     .start_new_sandwich(Bread::Toast, Component::Tomato)
///     .next(|current| tech.add_component(current, Component::Cheese))
///     .finish(|current| tech.finish_sandwich(current, None));
/// assert!(sandwich.is_ok());
/// ```
pub trait Chain {
    /// Apply `op` to the current result, unless it already failed
    ///
    /// A failed input is returned unchanged; `op` is never invoked on it.
    fn next<F>(self, op: F) -> KitchenResult<Body>
    where
        F: FnOnce(KitchenResult<Body>) -> KitchenResult<Body>;

    /// Apply the terminal `op` to the current result, failed or not
    ///
    /// The operation itself is responsible for passing a prior failure
    /// through to the Ready-typed result.
    fn finish<F>(self, op: F) -> KitchenResult<Ready>
    where
        F: FnOnce(KitchenResult<Body>) -> KitchenResult<Ready>;
}

impl Chain for KitchenResult<Body> {
    fn next<F>(self, op: F) -> KitchenResult<Body>
    where
        F: FnOnce(KitchenResult<Body>) -> KitchenResult<Body>,
    {
        if self.is_err() {
            return self;
        }
        op(self)
    }

    fn finish<F>(self, op: F) -> KitchenResult<Ready>
    where
        F: FnOnce(KitchenResult<Body>) -> KitchenResult<Ready>,
    {
        op(self)
    }
}
