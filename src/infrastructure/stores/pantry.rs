//! In-memory ingredient store
//!
//! The storage stub behind the [`IngredientStore`] port: a set of available
//! ingredients, nothing more. Anything absent from the set is not-found.

use crate::domain::pipeline::{KitchenError, KitchenResult};
use crate::domain::ports::IngredientStore;
use crate::domain::value_objects::{Bread, Component, Ingredient};
use std::collections::HashSet;

/// Ingredient store backed by an in-memory set
#[derive(Debug, Clone, Default)]
pub struct InMemoryPantry {
    available: HashSet<Ingredient>,
}

impl InMemoryPantry {
    /// A pantry with every known ingredient available
    pub fn stocked() -> Self {
        let mut available = HashSet::new();
        for bread in [Bread::Toast, Bread::Baguette, Bread::Rye] {
            available.insert(Ingredient::Bread(bread));
        }
        for component in [
            Component::Tomato,
            Component::Cheese,
            Component::Salt,
            Component::Cucumber,
            Component::Ham,
        ] {
            available.insert(Ingredient::Component(component));
        }
        Self { available }
    }

    /// A pantry with nothing available
    pub fn empty() -> Self {
        Self::default()
    }

    /// A stocked pantry with specific outages
    pub fn without(outages: &[Ingredient]) -> Self {
        let mut pantry = Self::stocked();
        for ingredient in outages {
            pantry.available.remove(ingredient);
        }
        pantry
    }

    /// Number of available ingredients
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Check if nothing is available
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}

impl IngredientStore for InMemoryPantry {
    fn get(&self, ingredient: Ingredient) -> KitchenResult<Ingredient> {
        if self.available.contains(&ingredient) {
            Ok(ingredient)
        } else {
            Err(KitchenError::NotFound { ingredient })
        }
    }
}
