//! Recipe scripts and their registry
//!
//! A recipe is a pure sequence of operation-contract calls, closed over no
//! interpreter. It becomes executable only when applied to a [`Technology`].
//! The [`RecipeBook`] keeps the built-in scripts in a fixed order so that
//! default selection ("pick first") is deterministic.

use crate::domain::entities::Ready;
use crate::domain::pipeline::{Chain, KitchenResult};
use crate::domain::ports::Technology;
use crate::domain::value_objects::{Bread, Component};

/// The executable part of a recipe
pub type RecipeSteps = fn(&Technology) -> KitchenResult<Ready>;

/// A named script written purely against the operation contracts
#[derive(Debug, Clone, Copy)]
pub struct Recipe {
    name: &'static str,
    description: &'static str,
    steps: RecipeSteps,
}

impl Recipe {
    /// Get the recipe name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the recipe description
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Run the script against `tech`
    pub fn run(&self, tech: &Technology) -> KitchenResult<Ready> {
        (self.steps)(tech)
    }
}

/// Toast bottom, tomato, cheese, salt, open-faced.
fn classic(tech: &Technology) -> KitchenResult<Ready> {
    tech.start_new_sandwich(Bread::Toast, Component::Tomato)
        .next(|current| tech.add_component(current, Component::Cheese))
        .next(|current| tech.add_component(current, Component::Salt))
        .finish(|current| tech.finish_sandwich(current, None))
}

/// Rye bottom, ham, cucumber, closed with rye.
fn ham_on_rye(tech: &Technology) -> KitchenResult<Ready> {
    tech.start_new_sandwich(Bread::Rye, Component::Ham)
        .next(|current| tech.add_component(current, Component::Cucumber))
        .finish(|current| tech.finish_sandwich(current, Some(Bread::Rye)))
}

/// Ordered registry of available recipes
#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// The built-in recipes, in registry order
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                Recipe {
                    name: "classic",
                    description: "toast, tomato, cheese, salt, open-faced",
                    steps: classic,
                },
                Recipe {
                    name: "ham-on-rye",
                    description: "rye, ham, cucumber, closed with rye",
                    steps: ham_on_rye,
                },
            ],
        }
    }

    /// Deterministic default selection: the first registered recipe
    pub fn first(&self) -> Option<&Recipe> {
        self.recipes.first()
    }

    /// Look up a recipe by name
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    /// Iterate recipes in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Number of registered recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self::builtin()
    }
}
