//! Property tests for the Body/Ready invariants.

use proptest::prelude::*;

use sando::domain::entities::{Body, Ready};
use sando::domain::value_objects::{Bread, Component};
use sando::error::BuildError;

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

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a Body built with a bottom and >= 1 component is always
    /// valid and preserves insertion order.
    #[test]
    fn property_built_body_is_always_valid(
        bottom in bread(),
        comps in components(1),
    ) {
        let mut builder = Body::builder().bottom(bottom);
        for c in &comps {
            builder = builder.component(*c);
        }
        let body = builder.build().unwrap();

        prop_assert_eq!(body.bottom(), bottom);
        prop_assert!(!body.components().is_empty());
        prop_assert_eq!(body.components(), comps.as_slice());
    }

    /// PROPERTY: building without a bottom always fails, whatever the
    /// components look like.
    #[test]
    fn property_body_without_bottom_never_builds(
        comps in components(0),
    ) {
        let mut builder = Body::builder();
        for c in &comps {
            builder = builder.component(*c);
        }

        prop_assert_eq!(builder.build(), Err(BuildError::MissingBottom));
    }

    /// PROPERTY: adding components never mutates the original Body; each add
    /// produces a fresh value with exactly one more component.
    #[test]
    fn property_with_component_never_mutates(
        bottom in bread(),
        first in component(),
        additions in components(0),
    ) {
        let original = Body::builder()
            .bottom(bottom)
            .component(first)
            .build()
            .unwrap();
        let snapshot = original.clone();

        let mut current = original.clone();
        for (i, c) in additions.iter().enumerate() {
            let extended = current.with_component(*c);
            prop_assert_eq!(extended.components().len(), current.components().len() + 1);
            prop_assert_eq!(extended.components().last(), Some(c));
            current = extended;
            // The starting value is unchanged no matter how far we extend.
            prop_assert_eq!(&original, &snapshot, "mutated after {} adds", i + 1);
        }
    }

    /// PROPERTY: a Ready built from any valid Body has a valid inner body
    /// and forwards its accessors unchanged.
    #[test]
    fn property_ready_forwards_its_body(
        bottom in bread(),
        comps in components(1),
        top in proptest::option::of(bread()),
    ) {
        let mut builder = Body::builder().bottom(bottom);
        for c in &comps {
            builder = builder.component(*c);
        }
        let body = builder.build().unwrap();

        let ready = Ready::builder().body(body.clone()).top(top).build().unwrap();

        prop_assert_eq!(ready.bottom(), body.bottom());
        prop_assert_eq!(ready.components(), body.components());
        prop_assert_eq!(ready.body(), &body);
        prop_assert_eq!(ready.top(), top);
    }
}
