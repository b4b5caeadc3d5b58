//! CLI-specific error types and exit-code mappings.
//!
//! Port errors from the core crates are folded into a small set of
//! CLI-facing categories, each with a sysexits-style exit code.

use arcdeploy_core::{GatewayPortError, ReportWriteError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (missing or invalid environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The gateway service could not be reached or rejected a request.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The deployment report could not be written.
    #[error("Report error: {0}")]
    Report(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success (including runs with per-toolkit deploy failures)
    /// - 64-78: Various error categories (sysexits.h style)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) => 78,  // EX_CONFIG
            CliError::Gateway(_) => 69, // EX_UNAVAILABLE
            CliError::Report(_) => 74,  // EX_IOERR
        }
    }
}

impl From<GatewayPortError> for CliError {
    fn from(err: GatewayPortError) -> Self {
        match err {
            GatewayPortError::Configuration { message } => CliError::Config(message),
            other => CliError::Gateway(other.to_string()),
        }
    }
}

impl From<ReportWriteError> for CliError {
    fn from(err: ReportWriteError) -> Self {
        CliError::Report(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_sysexits() {
        assert_eq!(CliError::Config("missing vars".to_string()).exit_code(), 78);
        assert_eq!(CliError::Gateway("503".to_string()).exit_code(), 69);
        assert_eq!(CliError::Report("disk full".to_string()).exit_code(), 74);
    }

    #[test]
    fn test_port_errors_map_to_gateway() {
        let err = GatewayPortError::Upstream {
            status: 503,
            message: "service unavailable".to_string(),
        };
        let cli_err = CliError::from(err);
        assert!(matches!(cli_err, CliError::Gateway(_)));
        assert!(cli_err.to_string().contains("503"));
    }

    #[test]
    fn test_port_configuration_maps_to_config() {
        let err = GatewayPortError::Configuration {
            message: "bad base URL".to_string(),
        };
        assert!(matches!(CliError::from(err), CliError::Config(_)));
    }
}
