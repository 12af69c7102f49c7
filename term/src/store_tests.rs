use color_eyre::eyre::eyre;
use std::cell::Cell;

use tours_lib::tour::TourId;

use crate::{
    store::{effect::Effect, reducer::StoreReducer},
    test_utils::make_tours,
};

use super::*;

#[test]
fn test_new() {
    let store = Store::new(State::default(), StoreReducer::boxed());
    let state = store.get_state();
    assert!(!state.loading());
    assert!(state.tours.is_empty());
}

#[test]
fn test_dispatch_uses_reducer() {
    let mut reducer = MockReducer::new();

    reducer
        .expect_reduce()
        .withf(|_, action| *action == Action::RemoveTour(TourId::new("1")))
        .returning(|state, _| {
            state.version = 42;
            Effect::None
        })
        .times(1);

    let store = Store::new(State::default(), Box::new(reducer));

    store.dispatch(Action::RemoveTour(TourId::new("1")));

    assert_eq!(store.get_state().version, 42);
}

#[test]
fn test_dispatch_runs_returned_effect() {
    let seen = Rc::new(Cell::new(None));
    let seen_clone = Rc::clone(&seen);

    let mut store = Store::new(State::default(), StoreReducer::boxed());

    store.set_effect_fn(move |effect| {
        if let Effect::FetchTours(id) = effect {
            seen_clone.set(Some(id));
        }
        Ok(())
    });

    store.dispatch(Action::LoadTours);

    assert_eq!(seen.get(), Some(1));
    assert!(store.get_state().loading());
}

#[test]
fn test_failed_effect_settles_request() {
    let mut store = Store::new(State::default(), StoreReducer::boxed());

    store.set_effect_fn(|_| Err(eyre!("fetch process is gone")));

    store.dispatch(Action::LoadTours);

    let state = store.get_state();
    assert!(!state.loading());
    assert!(state.tours.is_empty());
}

#[test]
fn test_dispatch_without_effect_handler() {
    let store = Store::new(State::default(), StoreReducer::boxed());

    store.dispatch(Action::LoadTours);

    // request stays outstanding until something settles it
    assert!(store.get_state().loading());

    store.dispatch(Action::ToursSettled(1, Ok(make_tours(2))));

    let state = store.get_state();
    assert!(!state.loading());
    assert_eq!(state.tours.len(), 2);
}

#[test]
fn test_previous_state_snapshots_are_untouched() {
    let store = Store::new(State::default(), StoreReducer::boxed());

    let before = store.get_state();
    store.dispatch(Action::LoadTours);
    let after = store.get_state();

    assert!(!before.loading());
    assert!(after.loading());
}
