//! GitHub API fetch error types.

use thiserror::Error;

/// Any way a poll-cycle fetch can fail.
///
/// The watch loop reports every variant as one human-readable cause string
/// and never branches on which one occurred.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be built or the network call failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("failed to fetch issues: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON issue array.
    #[error("failed to decode issue list: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
