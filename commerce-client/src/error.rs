//! Client error types

use thiserror::Error;

/// Client error type
///
/// Every non-success HTTP status collapses into the single `Status` variant;
/// the commerce API carries no machine-readable error envelope worth
/// branching on.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not decode as the expected type
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
