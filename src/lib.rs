//! Sando - validated, composable sandwich assembly
//!
//! Sando demonstrates a pipeline pattern: immutable value objects that can
//! only exist in a valid state, a closed vocabulary of three operation
//! contracts, short-circuiting result combinators, and interchangeable
//! kitchen interpreters. Recipes are written purely against the vocabulary
//! and run unchanged under any kitchen.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{MakeError, MakeOutcome, MakeUseCase, Recipe, RecipeBook};
pub use domain::entities::{Body, BodyBuilder, Ready, ReadyBuilder};
pub use domain::pipeline::{Chain, KitchenError, KitchenResult};
pub use domain::ports::{
    IngredientStore, NoopEventSink, PrepEvent, PrepEventSink, Technology, TechnologyBuilder,
};
pub use domain::value_objects::{Bread, Component, Ingredient};
pub use error::{BuildError, BuildResult};
pub use infrastructure::{
    build_kitchen, home_kitchen, quiet_kitchen, ConsoleEventSink, InMemoryPantry, KitchenKind,
};
