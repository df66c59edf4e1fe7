//! Domain Ports (Interfaces)
//!
//! These define the boundaries of the domain layer: the operation vocabulary
//! ([`Technology`]) and the capabilities interpreters are handed
//! ([`IngredientStore`], [`PrepEventSink`]). Infrastructure provides the
//! concrete bindings and implementations.

pub mod ingredient_store;
pub mod prep_events;
pub mod technology;

pub use ingredient_store::IngredientStore;
pub use prep_events::{NoopEventSink, PrepEvent, PrepEventSink};
pub use technology::{AddFn, FinishFn, StartFn, Technology, TechnologyBuilder};
