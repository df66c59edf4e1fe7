//! Application Layer
//!
//! Scripts, their registry, and the use case that selects and executes one.

pub mod make;
pub mod recipes;

pub use make::{MakeError, MakeOutcome, MakeUseCase};
pub use recipes::{Recipe, RecipeBook};
