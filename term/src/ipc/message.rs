//! Message types exchanged between the renderer and the fetch process.

use crate::store::{action::FetchOutcome, state::RequestId};

/// Requests handled by the fetch process.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchMessage {
    /// Fetch the full tour list and report back under the given tag
    Load(RequestId),
    Quit,
}

/// Notifications handled by the renderer process.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererMessage {
    /// The fetch tagged with the given id settled
    ToursSettled(RequestId, FetchOutcome),
}
