//! Error types for Sando
//!
//! `BuildError` covers construction-time validation only: a builder that is
//! missing a required field fails here, synchronously, at the call site.
//! Domain failures that travel through the pipeline live in
//! [`crate::domain::pipeline::KitchenError`] instead.

use thiserror::Error;

/// Result type alias for construction entry points
pub type BuildResult<T> = Result<T, BuildError>;

/// Validation error raised while building a Body, Ready, or Technology
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Body built without a bottom slice
    #[error("body is missing its bottom bread")]
    MissingBottom,

    /// Body built with an empty component sequence
    #[error("body must hold at least one component")]
    NoComponents,

    /// Ready built without an inner body
    #[error("ready sandwich is missing its body")]
    MissingBody,

    /// Technology built without one of its three operation bindings
    #[error("technology is missing its '{binding}' operation binding")]
    MissingBinding { binding: &'static str },
}
