//! Domain Layer
//!
//! Pure core: value objects, validated entities, the pipeline combinators,
//! and the ports interpreters plug into. No I/O happens here.

pub mod entities;
pub mod pipeline;
pub mod ports;
pub mod value_objects;
