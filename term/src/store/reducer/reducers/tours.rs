//! Tour list reducers: issuing and settling fetches, removing entries.

use tours_lib::tour::TourId;

use crate::store::{
    action::FetchOutcome,
    state::{RequestId, State},
};

/// Tags a new fetch and marks it as the one whose result will be committed.
/// Any fetch still in flight is superseded.
pub fn begin_fetch(state: &mut State) -> RequestId {
    state.last_request += 1;
    if let Some(previous) = state.in_flight {
        log::debug!("fetch {previous} superseded by {}", state.last_request);
    }
    state.in_flight = Some(state.last_request);
    state.last_request
}

/// Commits the outcome of the in-flight fetch. Outcomes of superseded
/// fetches are dropped. Failures leave the current list untouched.
pub fn settle_fetch(state: &mut State, id: RequestId, outcome: FetchOutcome) {
    if state.in_flight != Some(id) {
        log::debug!("discarding result of stale fetch {id}");
        return;
    }

    state.in_flight = None;

    match outcome {
        Ok(tours) => {
            state.tours = tours;
            state.version += 1;
        }
        Err(err) => {
            log::error!("error fetching tours: {err}");
        }
    }
}

/// Removes the tour with the given id, no-op when absent.
pub fn remove_tour(state: &mut State, id: &TourId) {
    state.tours.retain(|t| t.id != *id);
}
