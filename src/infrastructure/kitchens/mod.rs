//! Kitchen interpreters
//!
//! Each kitchen binds the three operation contracts its own way and hands
//! back a [`Technology`]. Scripts never know which kitchen answered.

pub mod home;
pub mod quiet;

pub use home::home_kitchen;
pub use quiet::quiet_kitchen;

use crate::domain::ports::{IngredientStore, PrepEventSink, Technology};
use crate::error::BuildResult;
use std::str::FromStr;
use std::sync::Arc;

/// Which kitchen interpreter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KitchenKind {
    /// Store-checked, narrates each step through the event sink
    #[default]
    Home,
    /// Store-checked, no side effects
    Quiet,
}

impl KitchenKind {
    /// All known kitchen kinds, in catalog order
    pub fn all() -> [KitchenKind; 2] {
        [KitchenKind::Home, KitchenKind::Quiet]
    }
}

impl std::fmt::Display for KitchenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KitchenKind::Home => write!(f, "home"),
            KitchenKind::Quiet => write!(f, "quiet"),
        }
    }
}

impl FromStr for KitchenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(KitchenKind::Home),
            "quiet" => Ok(KitchenKind::Quiet),
            other => Err(format!("unknown kitchen '{}', expected 'home' or 'quiet'", other)),
        }
    }
}

/// Build the Technology for `kind`
///
/// The quiet kitchen ignores `events`; it never emits.
pub fn build_kitchen(
    kind: KitchenKind,
    store: Arc<dyn IngredientStore>,
    events: Arc<dyn PrepEventSink>,
) -> BuildResult<Technology> {
    match kind {
        KitchenKind::Home => home_kitchen(store, events),
        KitchenKind::Quiet => quiet_kitchen(store),
    }
}
