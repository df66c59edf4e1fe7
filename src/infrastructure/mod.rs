//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: kitchen interpreters,
//! ingredient stores, and event sinks.

pub mod events;
pub mod kitchens;
pub mod stores;

pub use events::ConsoleEventSink;
pub use kitchens::{build_kitchen, home_kitchen, quiet_kitchen, KitchenKind};
pub use stores::InMemoryPantry;
