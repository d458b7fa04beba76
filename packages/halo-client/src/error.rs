//! Error types for the Halo API client.

use thiserror::Error;

/// Result type for Halo API operations.
pub type Result<T> = std::result::Result<T, HaloError>;

/// Halo API client errors.
#[derive(Debug, Error)]
pub enum HaloError {
    /// Transport-level failure (connection refused, DNS, malformed response body).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API. The body text is captured as-is.
    #[error("API error: {status} {message}")]
    Api { status: u16, message: String },
}

impl HaloError {
    /// True for a confirmed 404 from the remote API.
    pub fn is_not_found(&self) -> bool {
        matches!(self, HaloError::Api { status: 404, .. })
    }
}
