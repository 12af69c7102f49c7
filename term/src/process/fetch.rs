//! Fetch worker process.
//!
//! Owns the tour fetcher and performs blocking requests off the ui thread,
//! relaying every settled request back to the renderer tagged with the id
//! it was issued under.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use tours_lib::fetcher::TourFetcher;

use crate::{
    ipc::{
        fetch::FetchIpc,
        message::{FetchMessage, RendererMessage},
    },
    store::state::RequestId,
};

/// Data type for fetching tours on request. Relays results back to the
/// renderer thread via ipc.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct FetchProcess {
    fetcher: Box<dyn TourFetcher>,
    ipc: FetchIpc,
}

impl FetchProcess {
    pub fn builder() -> FetchProcessBuilder {
        FetchProcessBuilder::default()
    }

    /// Blocks serving load requests until told to quit or the renderer hangs
    /// up. Requests are served one at a time in the order received.
    pub fn serve(&self) -> Result<()> {
        loop {
            let Ok(msg) = self.ipc.rx.recv() else {
                log::debug!("renderer hung up, stopping fetch process");
                return Ok(());
            };

            match msg {
                FetchMessage::Load(id) => self.load(id)?,
                FetchMessage::Quit => return Ok(()),
            }
        }
    }

    fn load(&self, id: RequestId) -> Result<()> {
        log::info!("fetch {id} started");

        let outcome = self.fetcher.fetch_tours().map_err(|e| {
            log::error!("fetch {id} failed: {e}");
            e.to_string()
        });

        if let Ok(tours) = outcome.as_ref() {
            log::info!("fetch {id} returned {} tours", tours.len());
        }

        self.ipc.tx.send(RendererMessage::ToursSettled(id, outcome))
    }
}

#[cfg(test)]
#[path = "./fetch_tests.rs"]
mod tests;
