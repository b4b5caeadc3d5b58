//! URL construction helpers for the Arcade API.
//!
//! This module provides pure functions for building Arcade API URLs,
//! ensuring consistent URL construction across all API calls.

use url::Url;

use crate::models::ArcadeConfig;

/// Build the project tool listing URL for one page.
pub fn build_tools_url(config: &ArcadeConfig, limit: usize, offset: usize) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/orgs/{}/projects/{}/tools",
        config.org_id, config.project_id
    ));
    url.set_query(Some(&format!("limit={limit}&offset={offset}")));

    url
}

/// Build the project gateway listing and creation URL.
pub fn build_gateways_url(config: &ArcadeConfig) -> Url {
    let mut url = config.base_url.clone();

    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!(
        "{base_path}/orgs/{}/projects/{}/gateways",
        config.org_id, config.project_id
    ));

    url
}

/// Build the public URL a deployed MCP server is reachable under.
pub fn build_mcp_url(config: &ArcadeConfig, slug: &str) -> String {
    format!("{}/{slug}", config.mcp_base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> ArcadeConfig {
        ArcadeConfig {
            base_url: Url::parse("https://api.arcade.dev/v1").unwrap(),
            api_key: "arc_test".to_string(),
            org_id: "org_123".to_string(),
            project_id: "proj_456".to_string(),
            mcp_base: "https://api.arcade.dev/mcp".to_string(),
            user_agent: "arcdeploy-test".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_build_tools_url_first_page() {
        let url = build_tools_url(&test_config(), 100, 0);
        assert_eq!(
            url.as_str(),
            "https://api.arcade.dev/v1/orgs/org_123/projects/proj_456/tools?limit=100&offset=0"
        );
    }

    #[test]
    fn test_build_tools_url_later_page() {
        let url = build_tools_url(&test_config(), 100, 200);
        assert_eq!(
            url.as_str(),
            "https://api.arcade.dev/v1/orgs/org_123/projects/proj_456/tools?limit=100&offset=200"
        );
    }

    #[test]
    fn test_build_tools_url_with_trailing_slash_base() {
        let mut config = test_config();
        config.base_url = Url::parse("https://api.arcade.dev/v1/").unwrap();

        let url = build_tools_url(&config, 100, 0);
        assert_eq!(
            url.as_str(),
            "https://api.arcade.dev/v1/orgs/org_123/projects/proj_456/tools?limit=100&offset=0"
        );
    }

    #[test]
    fn test_build_gateways_url() {
        let url = build_gateways_url(&test_config());
        assert_eq!(
            url.as_str(),
            "https://api.arcade.dev/v1/orgs/org_123/projects/proj_456/gateways"
        );
    }

    #[test]
    fn test_build_mcp_url() {
        assert_eq!(
            build_mcp_url(&test_config(), "toqan-github"),
            "https://api.arcade.dev/mcp/toqan-github"
        );

        let mut config = test_config();
        config.mcp_base = "https://api.arcade.dev/mcp/".to_string();
        assert_eq!(
            build_mcp_url(&config, "toqan-github"),
            "https://api.arcade.dev/mcp/toqan-github"
        );
    }
}
