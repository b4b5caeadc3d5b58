//! Error types for gateway port operations.

use thiserror::Error;

/// Errors from gateway port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum GatewayPortError {
    /// Authentication failed or the credential lacks access.
    #[error("Authentication failed: {message}")]
    AuthFailed {
        /// What the service said about the credential
        message: String,
    },

    /// The service rejected a request with a non-success status.
    #[error("Upstream returned {status}: {message}")]
    Upstream {
        /// HTTP status code of the response
        status: u16,
        /// Error detail extracted from the response body
        message: String,
    },

    /// The service throttled the request.
    #[error("Rate limited: {message}")]
    RateLimited {
        /// What the service said about the throttle
        message: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// Invalid response from the API.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for gateway port operations.
pub type GatewayPortResult<T> = Result<T, GatewayPortError>;
