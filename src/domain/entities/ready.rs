//! Ready entity - a finished sandwich
//!
//! A `Ready` wraps a completed [`Body`] plus an optional top slice. It is
//! terminal: no operation contract accepts a `Ready` as input. The inner
//! Body is taken by ownership transfer and trusted as-is; its invariants
//! were enforced at its own construction and are not re-checked here.

use crate::domain::entities::Body;
use crate::domain::value_objects::{Bread, Component};
use crate::error::{BuildError, BuildResult};

/// A finished sandwich
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ready {
    /// The completed body
    body: Body,
    /// Optional top slice
    top: Option<Bread>,
}

impl Ready {
    /// Start a builder for a Ready sandwich
    pub fn builder() -> ReadyBuilder {
        ReadyBuilder::default()
    }

    /// Get the inner body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Get the optional top slice
    pub fn top(&self) -> Option<Bread> {
        self.top
    }

    /// Get the bottom slice (forwarded from the body)
    pub fn bottom(&self) -> Bread {
        self.body.bottom()
    }

    /// Get the stacked components (forwarded from the body)
    pub fn components(&self) -> &[Component] {
        self.body.components()
    }
}

impl std::fmt::Display for Ready {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)?;
        match self.top {
            Some(top) => write!(f, " + {} (closed)", top),
            None => write!(f, " (open-faced)"),
        }
    }
}

/// Validating builder for [`Ready`]
#[derive(Debug, Default)]
pub struct ReadyBuilder {
    body: Option<Body>,
    top: Option<Bread>,
}

impl ReadyBuilder {
    /// Set the completed body (ownership transfer)
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the optional top slice
    pub fn top(mut self, top: Option<Bread>) -> Self {
        self.top = top;
        self
    }

    /// Validate and build the Ready sandwich
    ///
    /// Fails with [`BuildError::MissingBody`] when no body was supplied.
    pub fn build(self) -> BuildResult<Ready> {
        let body = self.body.ok_or(BuildError::MissingBody)?;
        Ok(Ready {
            body,
            top: self.top,
        })
    }
}
