//! Action types for state transitions.

use tours_lib::tour::{Tour, TourId};

use crate::store::state::RequestId;

/// Result of a settled fetch as relayed by the fetch process. The error side
/// carries the display form of the failure.
pub type FetchOutcome = Result<Vec<Tour>, String>;

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Issues a fetch for the full list of tours
    LoadTours,
    /// Re-fetches the full list, replacing the current one
    RefreshTours,
    /// A previously issued fetch settled
    ToursSettled(RequestId, FetchOutcome),
    /// Drops a tour from the in-memory list
    RemoveTour(TourId),
}
