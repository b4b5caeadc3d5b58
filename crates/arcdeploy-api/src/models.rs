//! Internal API request and response types for the Arcade gateway API.
//!
//! These types are internal to `arcdeploy-api` and are not exposed to
//! consumers. External consumers should use the port DTOs defined in
//! `arcdeploy-core`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the Arcade gateway client.
#[derive(Clone)]
pub struct ArcadeConfig {
    /// Base URL for the Arcade API (default: <https://api.arcade.dev/v1>)
    pub base_url: Url,
    /// API key sent as a bearer token on every request
    pub api_key: String,
    /// Organization ID the project belongs to
    pub org_id: String,
    /// Project ID whose tools and gateways are managed
    pub project_id: String,
    /// Base URL under which deployed MCP servers are reachable
    pub mcp_base: String,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ArcadeConfig {
    // Manual impl so the API key never reaches logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcadeConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"***")
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("mcp_base", &self.mcp_base)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

// ============================================================================
// Tool Listing (API response)
// ============================================================================

/// Toolkit reference embedded in a tool listing item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolkitRef {
    /// Toolkit name (e.g., "Github")
    #[serde(default)]
    pub name: Option<String>,
    /// Toolkit description
    #[serde(default)]
    pub description: Option<String>,
}

/// A single tool from the project tool listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolItem {
    /// Fully qualified tool name (e.g., `Github.CreateIssue`)
    #[serde(default)]
    pub qualified_name: Option<String>,
    /// The toolkit this tool belongs to
    #[serde(default)]
    pub toolkit: Option<ToolkitRef>,
}

/// One page of the project tool listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsPage {
    /// Tools on this page
    #[serde(default)]
    pub items: Vec<ToolItem>,
    /// Total number of tools across all pages, when the API reports it
    #[serde(default)]
    pub total_count: Option<usize>,
}

// ============================================================================
// Gateway Listing (API response)
// ============================================================================

/// A single gateway from the project gateway listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayItem {
    /// URL slug of the gateway
    #[serde(default)]
    pub slug: Option<String>,
}

/// One page of the project gateway listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaysPage {
    /// Gateways on this page
    #[serde(default)]
    pub items: Vec<GatewayItem>,
}

// ============================================================================
// Gateway Creation (API request/response)
// ============================================================================

/// Tool filter restricting which tools a gateway exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFilter {
    /// Qualified names of the tools the gateway may serve
    pub allowed_tools: Vec<String>,
}

/// Request body for creating a gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGatewayRequest {
    /// Display name of the gateway
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// URL slug the gateway is served under
    pub slug: String,
    /// Lifecycle status, always "active" for new gateways
    pub status: String,
    /// Authentication scheme, always "arcade"
    pub auth_type: String,
    /// Tools the gateway exposes
    pub tool_filter: ToolFilter,
}

/// Response body from creating a gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGatewayResponse {
    /// Slug the API actually assigned, when reported
    #[serde(default)]
    pub slug: Option<String>,
}
