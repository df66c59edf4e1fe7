//! Body entity - a sandwich under construction
//!
//! A `Body` is only obtainable through [`BodyBuilder::build`], which checks
//! the invariants first: the bottom slice must be set and the component
//! sequence must be non-empty. Every live `Body` is therefore valid, always,
//! not just at checkpoints. Extension is copy-on-write: adding a component
//! yields a new `Body` and leaves the original untouched.

use crate::domain::value_objects::{Bread, Component};
use crate::error::{BuildError, BuildResult};

/// A sandwich under construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// Bottom slice
    bottom: Bread,
    /// Stacked components, insertion order preserved, never empty
    components: Vec<Component>,
}

impl Body {
    /// Start a builder for a new Body
    pub fn builder() -> BodyBuilder {
        BodyBuilder::default()
    }

    /// Get the bottom slice
    pub fn bottom(&self) -> Bread {
        self.bottom
    }

    /// Get the stacked components, in insertion order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Return a new Body with `component` stacked on top
    ///
    /// The receiver is not modified. The new Body shares no mutable state
    /// with the original. Cannot fail: the source Body already satisfies the
    /// invariants and the result only grows the component sequence.
    pub fn with_component(&self, component: Component) -> Body {
        let mut components = self.components.clone();
        components.push(component);
        Body {
            bottom: self.bottom,
            components,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bottom)?;
        for component in &self.components {
            write!(f, " + {}", component)?;
        }
        Ok(())
    }
}

/// Validating builder for [`Body`]
#[derive(Debug, Default)]
pub struct BodyBuilder {
    bottom: Option<Bread>,
    components: Vec<Component>,
}

impl BodyBuilder {
    /// Set the bottom slice
    pub fn bottom(mut self, bread: Bread) -> Self {
        self.bottom = Some(bread);
        self
    }

    /// Append a component
    pub fn component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Validate and build the Body
    ///
    /// Fails with [`BuildError::MissingBottom`] when no bottom slice was set,
    /// or [`BuildError::NoComponents`] when no component was appended.
    pub fn build(self) -> BuildResult<Body> {
        let bottom = self.bottom.ok_or(BuildError::MissingBottom)?;
        if self.components.is_empty() {
            return Err(BuildError::NoComponents);
        }
        Ok(Body {
            bottom,
            components: self.components,
        })
    }
}
