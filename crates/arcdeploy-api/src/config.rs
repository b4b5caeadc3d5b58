//! Public configuration for the Arcade gateway client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

use arcdeploy_core::DEFAULT_MCP_BASE;

/// Configuration for the Arcade gateway client.
///
/// The API key, organization ID, and project ID are required; everything else
/// has sensible defaults that can be overridden with the builder methods.
///
/// # Example
///
/// ```
/// use arcdeploy_api::GatewayClientConfig;
/// use std::time::Duration;
///
/// let config = GatewayClientConfig::new("arc_key", "org_123", "proj_456")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct GatewayClientConfig {
    /// Base URL for the Arcade API
    pub(crate) base_url: String,
    /// API key sent as a bearer token on every request
    pub(crate) api_key: String,
    /// Organization ID the project belongs to
    pub(crate) org_id: String,
    /// Project ID whose tools and gateways are managed
    pub(crate) project_id: String,
    /// Base URL under which deployed MCP servers are reachable
    pub(crate) mcp_base: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl GatewayClientConfig {
    /// Create a new configuration for the given credentials.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        org_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: "https://api.arcade.dev/v1".to_string(),
            api_key: api_key.into(),
            org_id: org_id.into(),
            project_id: project_id.into(),
            mcp_base: DEFAULT_MCP_BASE.to_string(),
            user_agent: concat!("arcdeploy/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL for the Arcade API.
    ///
    /// Defaults to `https://api.arcade.dev/v1`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the base URL under which deployed MCP servers are reachable.
    ///
    /// Defaults to `https://api.arcade.dev/mcp`.
    #[must_use]
    pub fn with_mcp_base(mut self, url: impl Into<String>) -> Self {
        self.mcp_base = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for GatewayClientConfig {
    // Manual impl so the API key never reaches logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("mcp_base", &self.mcp_base)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}
