//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The Arcade API client is constructed here and
//! handed to handlers as a `GatewayPort` trait object.

use std::sync::Arc;

use arcdeploy_api::{DefaultGatewayClient, GatewayClientConfig};
use arcdeploy_core::{DEFAULT_MCP_BASE, GatewayPort};

use crate::error::CliError;

/// Environment variables that must be set to talk to the Arcade API.
const REQUIRED_VARS: [&str; 3] = ["ARCADE_API_KEY", "ARCADE_ORG_ID", "ARCADE_PROJECT_ID"];

/// Default base URL for the Arcade API.
const DEFAULT_BASE_URL: &str = "https://api.arcade.dev/v1";

/// Bootstrap configuration for the CLI, read from the environment.
#[derive(Clone)]
pub struct CliConfig {
    /// API key for the Arcade API.
    pub api_key: String,
    /// Organization ID the deploy targets.
    pub org_id: String,
    /// Project ID the deploy targets.
    pub project_id: String,
    /// Base URL for the Arcade API.
    pub base_url: String,
    /// Base URL under which deployed MCP servers are reachable.
    pub mcp_base: String,
    /// Slug prefix for created gateways, when configured.
    pub slug_prefix: Option<String>,
}

impl CliConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` naming every missing required variable at
    /// once, so a fresh setup can be fixed in one pass.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as missing; an `.env` file with blank entries
    /// behaves the same as one with the lines removed.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CliError::Config(format!(
                "Missing required env vars: {}. Copy .env.example to .env and configure values.",
                missing.join(", ")
            )));
        }

        Ok(Self {
            api_key: get("ARCADE_API_KEY").unwrap_or_default(),
            org_id: get("ARCADE_ORG_ID").unwrap_or_default(),
            project_id: get("ARCADE_PROJECT_ID").unwrap_or_default(),
            base_url: get("ARCADE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            mcp_base: get("ARCADE_MCP_BASE").unwrap_or_else(|| DEFAULT_MCP_BASE.to_string()),
            slug_prefix: get("GATEWAY_SLUG_PREFIX"),
        })
    }
}

impl std::fmt::Debug for CliConfig {
    // Manual impl so the API key never reaches logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("api_key", &"***")
            .field("org_id", &self.org_id)
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("mcp_base", &self.mcp_base)
            .field("slug_prefix", &self.slug_prefix)
            .finish()
    }
}

/// Fully composed application context for CLI commands.
///
/// Handlers receive this context and reach the Arcade API exclusively
/// through the gateway port.
pub struct CliContext {
    gateway: Arc<dyn GatewayPort>,
    config: CliConfig,
}

impl CliContext {
    /// Access the gateway port.
    #[must_use]
    pub fn gateway(&self) -> Arc<dyn GatewayPort> {
        self.gateway.clone()
    }

    /// Access the CLI configuration.
    #[must_use]
    pub const fn config(&self) -> &CliConfig {
        &self.config
    }
}

/// Bootstrap the CLI application.
///
/// This is the only place a concrete API client is constructed.
#[must_use]
pub fn bootstrap(config: CliConfig) -> CliContext {
    let client_config = GatewayClientConfig::new(
        config.api_key.as_str(),
        config.org_id.as_str(),
        config.project_id.as_str(),
    )
    .with_base_url(config.base_url.as_str())
    .with_mcp_base(config.mcp_base.as_str());

    let gateway: Arc<dyn GatewayPort> = Arc::new(DefaultGatewayClient::new(&client_config));

    CliContext { gateway, config }
}

/// Bootstrap with a pre-built gateway (for testing).
#[must_use]
pub fn bootstrap_with(gateway: Arc<dyn GatewayPort>, config: CliConfig) -> CliContext {
    CliContext { gateway, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(entries: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_complete_environment() {
        let config = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", "arc_test"),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
            ("GATEWAY_SLUG_PREFIX", "toqan"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "arc_test");
        assert_eq!(config.org_id, "org_123");
        assert_eq!(config.project_id, "proj_456");
        assert_eq!(config.base_url, "https://api.arcade.dev/v1");
        assert_eq!(config.mcp_base, DEFAULT_MCP_BASE);
        assert_eq!(config.slug_prefix.as_deref(), Some("toqan"));
    }

    #[test]
    fn test_every_missing_var_is_named() {
        let err = CliConfig::from_lookup(lookup_in(&[("ARCADE_ORG_ID", "org_123")])).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("ARCADE_API_KEY"));
        assert!(message.contains("ARCADE_PROJECT_ID"));
        assert!(!message.contains("ARCADE_ORG_ID"));
        assert!(message.contains(".env.example"));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", ""),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("ARCADE_API_KEY"));
    }

    #[test]
    fn test_empty_prefix_is_none() {
        let config = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", "arc_test"),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
            ("GATEWAY_SLUG_PREFIX", ""),
        ]))
        .unwrap();

        assert!(config.slug_prefix.is_none());
    }

    #[test]
    fn test_base_url_overrides() {
        let config = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", "arc_test"),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
            ("ARCADE_BASE_URL", "https://staging.arcade.dev/v1"),
            ("ARCADE_MCP_BASE", "https://staging.arcade.dev/mcp"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://staging.arcade.dev/v1");
        assert_eq!(config.mcp_base, "https://staging.arcade.dev/mcp");
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", "arc_secret_key"),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
        ]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("arc_secret_key"));
        assert!(rendered.contains("org_123"));
    }

    #[test]
    fn test_context_exposes_config() {
        let config = CliConfig::from_lookup(lookup_in(&[
            ("ARCADE_API_KEY", "arc_test"),
            ("ARCADE_ORG_ID", "org_123"),
            ("ARCADE_PROJECT_ID", "proj_456"),
        ]))
        .unwrap();

        let ctx = bootstrap(config);
        assert_eq!(ctx.config().org_id, "org_123");
    }
}
