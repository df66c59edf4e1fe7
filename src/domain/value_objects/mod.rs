//! Domain Value Objects
//!
//! Immutable, value-equality types with no identity of their own.

pub mod ingredient;

pub use ingredient::{Bread, Component, Ingredient};
