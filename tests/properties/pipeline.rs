//! Property tests for the combinators and interpreter substitutability.

use proptest::prelude::*;
use std::cell::RefCell;
use std::sync::Arc;

use sando::domain::entities::Body;
use sando::domain::pipeline::{Chain, KitchenError, KitchenResult};
use sando::domain::ports::NoopEventSink;
use sando::domain::value_objects::{Bread, Component};
use sando::infrastructure::kitchens::{home_kitchen, quiet_kitchen};
use sando::infrastructure::stores::InMemoryPantry;

fn bread() -> impl Strategy<Value = Bread> {
    prop_oneof![
        Just(Bread::Toast),
        Just(Bread::Baguette),
        Just(Bread::Rye),
    ]
}

fn component() -> impl Strategy<Value = Component> {
    prop_oneof![
        Just(Component::Tomato),
        Just(Component::Cheese),
        Just(Component::Salt),
        Just(Component::Cucumber),
        Just(Component::Ham),
    ]
}

fn components(min: usize) -> impl Strategy<Value = Vec<Component>> {
    proptest::collection::vec(component(), min..=8)
}

fn start(bottom: Bread, first: Component) -> KitchenResult<Body> {
    Ok(Body::builder()
        .bottom(bottom)
        .component(first)
        .build()
        .unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: once a `next` step fails, no later `next` op is invoked and
    /// the final result is the *first* failure, identically.
    #[test]
    fn property_next_short_circuits_after_first_failure(
        first in component(),
        comps in components(1),
        fail_at in 0usize..8,
        missing in component(),
    ) {
        let fail_at = fail_at % comps.len();
        let first_error = KitchenError::not_found(missing);
        let invocations = RefCell::new(vec![0usize; comps.len()]);

        let mut current = start(Bread::Toast, first);
        for (i, c) in comps.iter().enumerate() {
            let c = *c;
            current = current.next(|cur| {
                invocations.borrow_mut()[i] += 1;
                if i == fail_at {
                    Err(first_error.clone())
                } else {
                    cur.map(|body| body.with_component(c))
                }
            });
        }

        prop_assert_eq!(current, Err(first_error));
        let counts = invocations.borrow();
        for (i, count) in counts.iter().enumerate() {
            if i <= fail_at {
                prop_assert_eq!(*count, 1, "op {} should run exactly once", i);
            } else {
                prop_assert_eq!(*count, 0, "op {} ran after the failure", i);
            }
        }
    }

    /// PROPERTY: `finish` is invoked exactly once whether or not the chain
    /// already failed.
    #[test]
    fn property_finish_always_runs(
        first in component(),
        failed in proptest::bool::ANY,
        missing in component(),
    ) {
        let current: KitchenResult<Body> = if failed {
            Err(KitchenError::not_found(missing))
        } else {
            start(Bread::Rye, first)
        };
        let invocations = RefCell::new(0usize);

        let result = current.finish(|cur| {
            *invocations.borrow_mut() += 1;
            cur.map(|body| {
                sando::domain::entities::Ready::builder()
                    .body(body)
                    .build()
                    .unwrap()
            })
        });

        prop_assert_eq!(*invocations.borrow(), 1);
        prop_assert_eq!(result.is_err(), failed);
    }

    /// PROPERTY: the home and quiet kitchens produce structurally equal
    /// results for any script over a fully stocked pantry.
    #[test]
    fn property_kitchens_are_substitutable(
        bottom in bread(),
        first in component(),
        additions in components(0),
        top in proptest::option::of(bread()),
    ) {
        let store = Arc::new(InMemoryPantry::stocked());
        let home = home_kitchen(store.clone(), Arc::new(NoopEventSink)).unwrap();
        let quiet = quiet_kitchen(store).unwrap();

        let run = |tech: &sando::domain::ports::Technology| {
            let mut current = tech.start_new_sandwich(bottom, first);
            for c in &additions {
                let c = *c;
                current = current.next(|cur| tech.add_component(cur, c));
            }
            current.finish(|cur| tech.finish_sandwich(cur, top))
        };

        prop_assert_eq!(run(&home), run(&quiet));
    }
}
