//! Home kitchen - the store-checked, event-emitting interpreter
//!
//! Each binding first asks the injected [`IngredientStore`] for the
//! ingredients it is about to use, then advances the sandwich. Every step's
//! outcome is narrated through the injected [`PrepEventSink`]. The `add` and
//! `finish` bindings pass a pre-existing failure straight through without
//! touching the store or emitting an added/finished event.

use crate::domain::entities::{Body, Ready};
use crate::domain::pipeline::KitchenResult;
use crate::domain::ports::{IngredientStore, PrepEvent, PrepEventSink, Technology};
use crate::domain::value_objects::{Bread, Component};
use crate::error::BuildResult;
use std::sync::Arc;

/// Build the home-kitchen Technology
pub fn home_kitchen(
    store: Arc<dyn IngredientStore>,
    events: Arc<dyn PrepEventSink>,
) -> BuildResult<Technology> {
    let start = {
        let store = Arc::clone(&store);
        let events = Arc::clone(&events);
        move |bottom: Bread, first: Component| -> KitchenResult<Body> {
            let result = store
                .get(bottom.into())
                .and_then(|_| store.get(first.into()))
                .map(|_| new_body(bottom, first));
            match &result {
                Ok(_) => events.on_event(PrepEvent::Started { bottom, first }),
                Err(error) => events.on_event(PrepEvent::StepFailed {
                    error: error.clone(),
                }),
            }
            result
        }
    };

    let add = {
        let store = Arc::clone(&store);
        let events = Arc::clone(&events);
        move |current: KitchenResult<Body>, component: Component| -> KitchenResult<Body> {
            let body = current?;
            let result = store
                .get(component.into())
                .map(|_| body.with_component(component));
            match &result {
                Ok(_) => events.on_event(PrepEvent::ComponentAdded { component }),
                Err(error) => events.on_event(PrepEvent::StepFailed {
                    error: error.clone(),
                }),
            }
            result
        }
    };

    let finish = {
        move |current: KitchenResult<Body>, top: Option<Bread>| -> KitchenResult<Ready> {
            let body = current?;
            let result = match top {
                Some(bread) => store.get(bread.into()).map(|_| new_ready(body, top)),
                None => Ok(new_ready(body, None)),
            };
            match &result {
                Ok(_) => events.on_event(PrepEvent::Finished { top }),
                Err(error) => events.on_event(PrepEvent::StepFailed {
                    error: error.clone(),
                }),
            }
            result
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
