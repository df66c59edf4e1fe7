//! Quiet kitchen - same assembly logic, no side effects
//!
//! Binds the three contracts directly, with no event plumbing at all. For a
//! fixed script and fixed inputs it produces a Ready structurally equal to
//! the home kitchen's, which is the substitutability the vocabulary promises.

use crate::domain::entities::{Body, Ready};
use crate::domain::pipeline::KitchenResult;
use crate::domain::ports::{IngredientStore, Technology};
use crate::domain::value_objects::{Bread, Component};
use crate::error::BuildResult;
use std::sync::Arc;

/// Build the quiet-kitchen Technology
pub fn quiet_kitchen(store: Arc<dyn IngredientStore>) -> BuildResult<Technology> {
    let start = {
        let store = Arc::clone(&store);
        move |bottom: Bread, first: Component| -> KitchenResult<Body> {
            store.get(bottom.into())?;
            store.get(first.into())?;
            Ok(new_body(bottom, first))
        }
    };

    let add = {
        let store = Arc::clone(&store);
        move |current: KitchenResult<Body>, component: Component| -> KitchenResult<Body> {
            let body = current?;
            store.get(component.into())?;
            Ok(body.with_component(component))
        }
    };

    let finish = {
        move |current: KitchenResult<Body>, top: Option<Bread>| -> KitchenResult<Ready> {
            let body = current?;
            if let Some(bread) = top {
                store.get(bread.into())?;
            }
            Ok(new_ready(body, top))
        }
    };

    Technology::builder()
        .start(start)
        .add(add)
        .finish(finish)
        .build()
}

// Both required fields are supplied, so the builders cannot fail here.
fn new_body(bottom: Bread, first: Component) -> Body {
    Body::builder()
        .bottom(bottom)
        .component(first)
        .build()
        .expect("start binding sets bottom and first component")
}

fn new_ready(body: Body, top: Option<Bread>) -> Ready {
    Ready::builder()
        .body(body)
        .top(top)
        .build()
        .expect("finish binding supplies the body")
}
