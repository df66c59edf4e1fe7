//! Domain Entities
//!
//! The two observable states of a sandwich: in-progress ([`Body`]) and
//! finished ([`Ready`]). Both are immutable and only constructible through
//! validating builders.

pub mod body;
pub mod ready;

pub use body::{Body, BodyBuilder};
pub use ready::{Ready, ReadyBuilder};
