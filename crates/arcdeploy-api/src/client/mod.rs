//! Arcade gateway client for listing project tools and deploying gateways.
//!
//! This module provides the main client interface for interacting with
//! the Arcade API.

// Constructor is used via port.rs which compiler doesn't detect
#![allow(dead_code)]

mod gateways;
mod tools;

use crate::config::GatewayClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ArcadeConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default Arcade gateway client using the reqwest HTTP backend.
pub type DefaultGatewayClient = GatewayClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for interacting with the Arcade API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultGatewayClient` for production code. The generic parameter `B`
/// is an implementation detail - external code should not instantiate this
/// directly but use `DefaultGatewayClient::new()`.
pub struct GatewayClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ArcadeConfig,
}

impl DefaultGatewayClient {
    /// Create a new client with the given configuration.
    #[must_use]
    pub fn new(config: &GatewayClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    fn to_internal_config(config: &GatewayClientConfig) -> ArcadeConfig {
        ArcadeConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://api.arcade.dev/v1").expect("default URL is valid")
            }),
            api_key: config.api_key.clone(),
            org_id: config.org_id.clone(),
            project_id: config.project_id.clone(),
            mcp_base: config.mcp_base.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> GatewayClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ArcadeConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
