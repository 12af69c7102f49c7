//! Redux-like state container for the terminal UI.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::store::{action::Action, effect::Effect, state::State};

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action. Returns the side
/// effect the store must carry out afterwards.
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

type EffectFn = Box<dyn Fn(Effect) -> color_eyre::eyre::Result<()>>;

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    effects: Option<EffectFn>,
}

impl Store {
    /// Creates a new store with the given initial state and reducer.
    pub fn new(initial_state: State, reducer: Box<dyn Reducer>) -> Self {
        Self {
            reducer,
            state: RefCell::new(Rc::new(initial_state)),
            effects: None,
        }
    }

    /// Registers the handler that carries out effects returned by the
    /// reducer, e.g. handing fetch requests to the fetch process.
    pub fn set_effect_fn<F>(&mut self, f: F)
    where
        F: Fn(Effect) -> color_eyre::eyre::Result<()> + 'static,
    {
        self.effects = Some(Box::new(f))
    }

    fn reduce(&self, action: Action) -> Effect {
        let mut rc = self.state.borrow_mut();
        let state = Rc::make_mut(&mut rc);
        self.reducer.reduce(state, action)
    }

    fn run_effect(&self, effect: Effect) {
        if effect == Effect::None {
            return;
        }

        let Some(f) = self.effects.as_ref() else {
            log::warn!("no effect handler registered, dropping {:?}", effect);
            return;
        };

        if let Err(err) = f(effect.clone()) {
            log::error!("failed to run effect {:?}: {}", effect, err);
            // the request was never handed off, settle it right away
            if let Some(action) = effect.failure_action(err.to_string()) {
                let follow_up = self.reduce(action);
                self.run_effect(follow_up);
            }
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = self.reduce(action);
        self.run_effect(effect);
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
