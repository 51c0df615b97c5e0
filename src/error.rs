use crate::normalize::error::RecordError;
use polars::error::PolarsError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MountainHubError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // The HTTP call succeeded but the body has no `results` array.
    #[error("Response did not contain a 'results' list: {0}")]
    MalformedResponse(Value),

    #[error("Observation at index {index} is malformed")]
    MalformedRecord {
        index: usize,
        #[source]
        source: RecordError,
    },

    #[error("Failed building DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
