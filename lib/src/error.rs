//! Custom Error and Result types for this library

use thiserror::Error;

use crate::fetcher::HttpTourFetcherBuilderError;

/// Custom Error type for this library
#[derive(Error, Debug)]
pub enum TourLibError {
    /// Transport level failure: dns, connect, tls, timeout etc.
    #[error("request failed: {_0}")]
    Request(String),

    /// Endpoint answered with a non success status code
    #[error("unexpected http status: {_0}")]
    Status(u16),

    /// Failure reading the response body
    #[error("failed to read response body: {_0}")]
    Body(String),

    /// Response body was not a JSON array of tours
    #[error("failed to decode tours: {_0}")]
    Decode(#[from] serde_json::Error),

    /// Error resulting from failure to build the http fetcher
    #[error("failed to build tour fetcher: {_0}")]
    FetcherBuild(#[from] HttpTourFetcherBuilderError),
}

impl From<ureq::Error> for TourLibError {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::StatusCode(code) => Self::Status(code),
            e => Self::Request(e.to_string()),
        }
    }
}

/// Custom Result type for this library. All Errors exposed by this library
/// will be returned as [`TourLibError`]
pub type Result<T> = std::result::Result<T, TourLibError>;
