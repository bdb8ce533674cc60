// src/error.rs
// =============================================================================
// Error types for the probing engine.
//
// Two layers:
// - Error: setup and persistence failures. These are fatal to the run and
//   bubble up to main.rs, which adds context with anyhow.
// - FetchError: what can go wrong while probing one URL. These never leave
//   the fetch worker; they only decide between "retry" and "give up".
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The domain does not form a valid base URL
    #[error("invalid target '{target}': {source}")]
    InvalidTarget {
        target: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Writing the results file failed
    #[error("failed to write results to '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The concurrency gate was closed while a worker waited on it
    #[error("concurrency gate closed")]
    GateClosed,
}

// Failure of a single probe attempt
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection refused, timeout, dropped connection, socket error.
    /// Costs one attempt from the retry budget.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Malformed URL, redirect loop, undecodable content. Retrying won't help.
    #[error("request rejected: {0}")]
    Rejected(#[source] reqwest::Error),

    /// The endpoint answered but its body is not JSON
    #[error("response body is not JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    // Sorts a reqwest error into the retryable or non-retryable bucket
    //
    // Builder errors (bad URL), redirect loops and content decoding errors
    // are checked first since they can also carry the request flag.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_builder() || error.is_redirect() || error.is_decode() {
            FetchError::Rejected(error)
        } else if error.is_timeout() || error.is_connect() || error.is_request() || error.is_body() {
            FetchError::Transport(error)
        } else {
            FetchError::Rejected(error)
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
