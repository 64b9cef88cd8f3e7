//! Errors raised while talking to the backend

use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 404 for the requested record
    #[error("record not found at {path}")]
    NotFound { path: String },

    /// Any other non-success status
    #[error("{path} answered HTTP {status}")]
    Status { status: u16, path: String },

    /// Connection, timeout or transport failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected record shape
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid backend URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
