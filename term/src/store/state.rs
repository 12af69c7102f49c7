//! Application state definitions.

use tours_lib::tour::Tour;

use crate::ui::colors::{Colors, Theme};

/// Tag attached to every issued fetch so stale results can be recognized.
pub type RequestId = u64;

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub theme: Theme,
    pub colors: Colors,
    /// Tours in response order
    pub tours: Vec<Tour>,
    /// Most recently issued fetch that has not settled yet
    pub in_flight: Option<RequestId>,
    /// Id handed out to the last issued fetch
    pub last_request: RequestId,
    /// Bumped every time a fetched list is committed
    pub version: u64,
}

impl State {
    /// Creates an empty state using the given theme.
    pub fn new(theme: Theme, true_color_enabled: bool) -> Self {
        Self {
            theme,
            colors: Colors::new(
                theme.to_palette(true_color_enabled),
                true_color_enabled,
            ),
            tours: Vec::new(),
            in_flight: None,
            last_request: 0,
            version: 0,
        }
    }

    /// True exactly while a fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Theme::default(), true)
    }
}
