//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        match action {
            Action::LoadTours => {
                self.log_action("LoadTours", &state.last_request);
                let id = reducers::tours::begin_fetch(state);
                Effect::FetchTours(id)
            }
            Action::RefreshTours => {
                self.log_action("RefreshTours", &state.last_request);
                let id = reducers::tours::begin_fetch(state);
                Effect::FetchTours(id)
            }
            Action::ToursSettled(id, outcome) => {
                // tours can be long, only log the count
                self.log_action(
                    "ToursSettled",
                    &(id, outcome.as_ref().map(|t| t.len())),
                );
                reducers::tours::settle_fetch(state, id, outcome);
                Effect::None
            }
            Action::RemoveTour(id) => {
                self.log_action("RemoveTour", &id);
                reducers::tours::remove_tour(state, &id);
                Effect::None
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
