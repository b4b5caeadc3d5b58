//! Deploy run configuration.
//!
//! Configuration is constructed once at startup and passed explicitly to the
//! driver; nothing reads ambient state after that.

use std::time::Duration;

/// Default pause between deploy calls.
///
/// Accommodates the gateway service's rate limit. Flat by design: no
/// backoff, no jitter.
pub const DEFAULT_DEPLOY_DELAY: Duration = Duration::from_secs(10);

/// Default base URL for public MCP endpoints.
///
/// Deployed gateways are reachable at `{base}/{slug}`.
pub const DEFAULT_MCP_BASE: &str = "https://api.arcade.dev/mcp";

/// Configuration for a deploy run.
///
/// Use the builder pattern methods to customize the run.
///
/// # Example
///
/// ```
/// use arcdeploy_core::DeployConfig;
/// use std::time::Duration;
///
/// let config = DeployConfig::new()
///     .with_slug_prefix("toqan")
///     .with_deploy_delay(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Optional prefix applied to every gateway slug, joined with `-`.
    pub slug_prefix: Option<String>,
    /// Fixed pause between deploy calls.
    pub deploy_delay: Duration,
    /// Preview the plan without deploying or pausing.
    pub dry_run: bool,
    /// Base URL for public MCP endpoints, used to predict dry-run URLs.
    pub mcp_base: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            slug_prefix: None,
            deploy_delay: DEFAULT_DEPLOY_DELAY,
            dry_run: false,
            mcp_base: DEFAULT_MCP_BASE.to_string(),
        }
    }
}

impl DeployConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slug prefix applied to every gateway slug.
    #[must_use]
    pub fn with_slug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slug_prefix = Some(prefix.into());
        self
    }

    /// Set an optional slug prefix. An empty prefix is treated as absent.
    #[must_use]
    pub fn with_optional_slug_prefix(mut self, prefix: Option<String>) -> Self {
        self.slug_prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Set the pause between deploy calls.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_deploy_delay(mut self, delay: Duration) -> Self {
        self.deploy_delay = delay;
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the base URL for public MCP endpoints.
    ///
    /// Defaults to `https://api.arcade.dev/mcp`.
    #[must_use]
    pub fn with_mcp_base(mut self, base: impl Into<String>) -> Self {
        self.mcp_base = base.into();
        self
    }

    /// Compose the public MCP endpoint URL for a slug.
    #[must_use]
    pub fn mcp_url(&self, slug: &str) -> String {
        format!("{}/{slug}", self.mcp_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeployConfig::new();
        assert!(config.slug_prefix.is_none());
        assert_eq!(config.deploy_delay, Duration::from_secs(10));
        assert!(!config.dry_run);
        assert_eq!(config.mcp_base, "https://api.arcade.dev/mcp");
    }

    #[test]
    fn test_builder_pattern() {
        let config = DeployConfig::new()
            .with_slug_prefix("toqan")
            .with_deploy_delay(Duration::from_secs(5))
            .with_dry_run(true)
            .with_mcp_base("https://staging.arcade.dev/mcp");

        assert_eq!(config.slug_prefix, Some("toqan".to_string()));
        assert_eq!(config.deploy_delay, Duration::from_secs(5));
        assert!(config.dry_run);
        assert_eq!(config.mcp_base, "https://staging.arcade.dev/mcp");
    }

    #[test]
    fn test_optional_slug_prefix_filters_empty() {
        let config = DeployConfig::new().with_optional_slug_prefix(Some(String::new()));
        assert!(config.slug_prefix.is_none());

        let config = DeployConfig::new().with_optional_slug_prefix(Some("toqan".to_string()));
        assert_eq!(config.slug_prefix, Some("toqan".to_string()));
    }

    #[test]
    fn test_mcp_url_trims_trailing_slash() {
        let config = DeployConfig::new().with_mcp_base("https://api.arcade.dev/mcp/");
        assert_eq!(
            config.mcp_url("toqan-github"),
            "https://api.arcade.dev/mcp/toqan-github"
        );
    }
}
