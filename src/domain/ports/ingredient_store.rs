//! IngredientStore port
//!
//! Abstracts ingredient availability. The core only ever asks "can I have
//! this ingredient"; where the answer comes from is infrastructure's concern.

use crate::domain::pipeline::KitchenResult;
use crate::domain::value_objects::Ingredient;

/// Storage capability injected into interpreters
///
/// `get` hands back the requested ingredient when it is available, or fails
/// with [`crate::domain::pipeline::KitchenError::NotFound`] carrying the
/// requested ingredient.
pub trait IngredientStore: Send + Sync {
    fn get(&self, ingredient: Ingredient) -> KitchenResult<Ingredient>;
}
