//! Side effects returned by the reducer for execution by the store.

use super::{action::Action, state::RequestId};

/// Side effects that the reducer requests to be performed after state updates.
///
/// This keeps the reducer pure by separating state computation from I/O
/// operations like network requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// Hand a fetch request tagged with the given id to the fetch process.
    FetchTours(RequestId),
}

impl Effect {
    /// Action to dispatch when carrying out this effect failed outright.
    pub fn failure_action(&self, reason: String) -> Option<Action> {
        match self {
            Effect::None => None,
            Effect::FetchTours(id) => {
                Some(Action::ToursSettled(*id, Err(reason)))
            }
        }
    }
}
