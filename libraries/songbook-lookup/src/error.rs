//! Error types for the lookup client.

use thiserror::Error;

/// Errors that can occur when querying the lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Service is offline, unreachable, or timed out
    #[error("Lookup service unreachable: {0}")]
    Unreachable(String),

    /// HTTP request failed for another reason
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service answered with a status other than 200
    #[error("Lookup service error ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Failed to parse the service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid base URL
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),
}

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
