//! Ingredient store implementations

pub mod pantry;

pub use pantry::InMemoryPantry;
