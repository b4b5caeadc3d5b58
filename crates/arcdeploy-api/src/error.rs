//! Internal error types for Arcade API operations.
//!
//! These errors are internal to `arcdeploy-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for Arcade API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to Arcade API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    ///
    /// `message` holds the server-provided error detail when the body carried
    /// one, otherwise the raw body text.
    #[error("Arcade API request failed with status {status}: {message}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Error detail extracted from the response body
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Arcade API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
