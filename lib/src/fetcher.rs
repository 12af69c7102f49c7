//! Provides the TourFetcher abstraction and its HTTP implementation

use derive_builder::Builder;
use std::time::Duration;

use crate::{
    error::{Result, TourLibError},
    tour::{Tour, decode_tours},
};

/// The public endpoint serving the list of tours
pub const DEFAULT_TOURS_ENDPOINT: &str =
    "https://www.course-api.com/react-tours-project";

/// Trait describing anything able to produce the current list of tours
pub trait TourFetcher: Send {
    /// Fetches and decodes the full list of tours. Blocks until the request
    /// settles.
    fn fetch_tours(&self) -> Result<Vec<Tour>>;
}

/// Fetches tours with a blocking `GET` against a JSON endpoint
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct HttpTourFetcher {
    /// URL returning a JSON array of tours
    #[builder(default = "DEFAULT_TOURS_ENDPOINT.to_string()")]
    endpoint: String,
    /// Overall request timeout. None waits indefinitely.
    #[builder(default)]
    timeout: Option<Duration>,
}

impl HttpTourFetcher {
    /// Returns builder for HttpTourFetcher
    pub fn builder() -> HttpTourFetcherBuilder {
        HttpTourFetcherBuilder::default()
    }

    /// Returns the endpoint this fetcher requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn agent(&self) -> ureq::Agent {
        let config = ureq::Agent::config_builder()
            .timeout_global(self.timeout)
            .build();
        ureq::Agent::new_with_config(config)
    }
}

impl TourFetcher for HttpTourFetcher {
    fn fetch_tours(&self) -> Result<Vec<Tour>> {
        log::debug!("fetching tours from {}", self.endpoint);

        let mut response = self.agent().get(&self.endpoint).call()?;

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TourLibError::Body(e.to_string()))?;

        let tours = decode_tours(&body)?;

        log::debug!("fetched {} tours", tours.len());

        Ok(tours)
    }
}

#[cfg(test)]
#[path = "./fetcher_tests.rs"]
mod tests;
