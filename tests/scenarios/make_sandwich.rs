//! Happy-path scenarios: recipes against conforming kitchens.

use std::sync::Arc;

use sando::application::{MakeError, MakeUseCase};
use sando::domain::ports::{NoopEventSink, Technology};
use sando::domain::value_objects::{Bread, Component};
use sando::error::BuildError;
use sando::infrastructure::kitchens::{home_kitchen, quiet_kitchen};
use sando::infrastructure::stores::InMemoryPantry;

fn home_tech() -> Technology {
    home_kitchen(
        Arc::new(InMemoryPantry::stocked()),
        Arc::new(NoopEventSink),
    )
    .unwrap()
}

#[test]
fn classic_recipe_end_to_end() {
    let outcome = MakeUseCase::default()
        .execute(Some("classic"), &home_tech())
        .unwrap();

    let ready = outcome.result.unwrap();
    assert_eq!(ready.bottom(), Bread::Toast);
    assert_eq!(
        ready.components(),
        &[Component::Tomato, Component::Cheese, Component::Salt]
    );
    assert_eq!(ready.top(), None);
}

#[test]
fn default_selection_picks_the_first_recipe() {
    let outcome = MakeUseCase::default().execute(None, &home_tech()).unwrap();

    assert_eq!(outcome.recipe, "classic");
}

#[test]
fn unknown_recipe_is_a_selection_error() {
    let err = MakeUseCase::default().execute(Some("blt"), &home_tech());

    assert_eq!(
        err.unwrap_err(),
        MakeError::UnknownRecipe {
            name: "blt".to_string()
        }
    );
}

#[test]
fn home_and_quiet_kitchens_agree_on_every_builtin_recipe() {
    let store = Arc::new(InMemoryPantry::stocked());
    let home = home_kitchen(store.clone(), Arc::new(NoopEventSink)).unwrap();
    let quiet = quiet_kitchen(store).unwrap();
    let book = MakeUseCase::default().book().clone();

    for recipe in book.iter() {
        let from_home = recipe.run(&home);
        let from_quiet = recipe.run(&quiet);
        assert_eq!(from_home, from_quiet, "recipe '{}' diverged", recipe.name());
    }
}

#[test]
fn technology_missing_any_binding_does_not_build() {
    let only_start = Technology::builder()
        .start(|bottom, first| {
            Ok(sando::domain::entities::Body::builder()
                .bottom(bottom)
                .component(first)
                .build()
                .unwrap())
        })
        .build();

    assert!(matches!(
        only_start,
        Err(BuildError::MissingBinding { binding: "add" })
    ));
}
