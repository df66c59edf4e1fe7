//! Technology port - the operation vocabulary and its strategy record
//!
//! A `Technology` binds the three operation contracts to concrete closures.
//! Scripts call the contracts; which closures answer is the interpreter's
//! business. A Technology is assembled once through [`TechnologyBuilder`]
//! (construction fails unless all three bindings are supplied) and is
//! immutable afterwards, so sharing one across call sites is safe.

use crate::domain::entities::{Body, Ready};
use crate::domain::pipeline::KitchenResult;
use crate::domain::value_objects::{Bread, Component};
use crate::error::{BuildError, BuildResult};

/// Binding for the "start" contract: produce the initial Body
pub type StartFn = Box<dyn Fn(Bread, Component) -> KitchenResult<Body> + Send + Sync>;

/// Binding for the "add" contract: extend a Body, passing failures through
pub type AddFn = Box<dyn Fn(KitchenResult<Body>, Component) -> KitchenResult<Body> + Send + Sync>;

/// Binding for the "finish" contract: convert a completed Body into a Ready
pub type FinishFn =
    Box<dyn Fn(KitchenResult<Body>, Option<Bread>) -> KitchenResult<Ready> + Send + Sync>;

/// A bound set of implementations for the three operation contracts
pub struct Technology {
    start: StartFn,
    add: AddFn,
    finish: FinishFn,
}

impl Technology {
    /// Start a builder for a Technology
    pub fn builder() -> TechnologyBuilder {
        TechnologyBuilder::default()
    }

    /// Produce the initial Body from a bottom slice and a first component
    pub fn start_new_sandwich(&self, bottom: Bread, first: Component) -> KitchenResult<Body> {
        (self.start)(bottom, first)
    }

    /// Extend the in-progress Body with one more component
    ///
    /// Conforming bindings return a failed `current` unchanged rather than
    /// attempting to add to it.
    pub fn add_component(
        &self,
        current: KitchenResult<Body>,
        component: Component,
    ) -> KitchenResult<Body> {
        (self.add)(current, component)
    }

    /// Convert a completed Body into a Ready sandwich
    ///
    /// Conforming bindings adapt a failed `current` into the Ready-typed
    /// failure; this is the terminal contract, so it is always invoked.
    pub fn finish_sandwich(
        &self,
        current: KitchenResult<Body>,
        top: Option<Bread>,
    ) -> KitchenResult<Ready> {
        (self.finish)(current, top)
    }
}

impl std::fmt::Debug for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Technology").finish_non_exhaustive()
    }
}

/// Validating builder for [`Technology`]
#[derive(Default)]
pub struct TechnologyBuilder {
    start: Option<StartFn>,
    add: Option<AddFn>,
    finish: Option<FinishFn>,
}

impl TechnologyBuilder {
    /// Bind the "start" contract
    pub fn start<F>(mut self, op: F) -> Self
    where
        F: Fn(Bread, Component) -> KitchenResult<Body> + Send + Sync + 'static,
    {
        self.start = Some(Box::new(op));
        self
    }

    /// Bind the "add" contract
    pub fn add<F>(mut self, op: F) -> Self
    where
        F: Fn(KitchenResult<Body>, Component) -> KitchenResult<Body> + Send + Sync + 'static,
    {
        self.add = Some(Box::new(op));
        self
    }

    /// Bind the "finish" contract
    pub fn finish<F>(mut self, op: F) -> Self
    where
        F: Fn(KitchenResult<Body>, Option<Bread>) -> KitchenResult<Ready> + Send + Sync + 'static,
    {
        self.finish = Some(Box::new(op));
        self
    }

    /// Validate and build the Technology
    ///
    /// Fails with [`BuildError::MissingBinding`] naming the first contract
    /// that was left unbound.
    pub fn build(self) -> BuildResult<Technology> {
        let start = self
            .start
            .ok_or(BuildError::MissingBinding { binding: "start" })?;
        let add = self.add.ok_or(BuildError::MissingBinding { binding: "add" })?;
        let finish = self
            .finish
            .ok_or(BuildError::MissingBinding { binding: "finish" })?;
        Ok(Technology { start, add, finish })
    }
}
