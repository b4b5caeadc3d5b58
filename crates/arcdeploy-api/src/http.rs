//! HTTP backend abstraction for the Arcade API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with bearer authentication on every request.

// Constructor used by client::mod but compiler doesn't track cross-module usage well
#![allow(dead_code)]

use crate::error::{ApiError, ApiResult};
use crate::models::ArcadeConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can exchange JSON with the Arcade API.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests.
///
/// This is an implementation detail - external code should use the
/// `GatewayPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;

    /// Post a JSON body to a URL and deserialize the JSON response.
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries the configured API key as a bearer token. Error
/// responses are decoded so the server-provided message survives into the
/// returned error.
///
/// This is an implementation detail - external code should use
/// `DefaultGatewayClient` and interact with it through the `GatewayPort` trait.
pub struct ReqwestBackend {
    client: reqwest::Client,
    api_key: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ArcadeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
        }
    }

    /// Attach the bearer token to a request.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Turn a non-2xx response into an error carrying the server's message.
    async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();

        Err(ApiError::ApiRequestFailed {
            status: status.as_u16(),
            url,
            message: extract_error_message(&body),
        })
    }
}

/// Pull the server-provided error detail out of a response body.
///
/// Arcade error bodies are JSON with a `message` field; anything else is
/// returned verbatim.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    body.to_string()
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        let request = self.authorize(self.client.get(url.as_str()));
        let response = Self::check_status(request.send().await?).await?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> ApiResult<T> {
        let request = self.authorize(self.client.post(url.as_str())).json(body);
        let response = Self::check_status(request.send().await?).await?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// A fake HTTP backend that serves canned responses and records requests.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        get_responses: Arc<Mutex<HashMap<String, serde_json::Value>>>,
        post_responses: Arc<Mutex<HashMap<String, serde_json::Value>>>,
        failures: Arc<Mutex<HashMap<String, (u16, String)>>>,
        get_urls: Arc<Mutex<Vec<String>>>,
        posts: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned GET response for a URL pattern.
        pub fn with_get_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.get_responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        /// Add a canned POST response for a URL pattern.
        pub fn with_post_response(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.post_responses
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), json);
            self
        }

        /// Fail any request to a matching URL with the given status and message.
        pub fn with_failure(self, url_contains: &str, status: u16, message: &str) -> Self {
            self.failures
                .lock()
                .unwrap()
                .insert(url_contains.to_string(), (status, message.to_string()));
            self
        }

        /// GET URLs requested so far, in order.
        pub fn get_urls(&self) -> Vec<String> {
            self.get_urls.lock().unwrap().clone()
        }

        /// POST requests sent so far as (url, body) pairs, in order.
        pub fn posted(&self) -> Vec<(String, serde_json::Value)> {
            self.posts.lock().unwrap().clone()
        }

        fn find_failure(&self, url: &str) -> Option<ApiError> {
            let failures = self.failures.lock().unwrap();
            for (pattern, (status, message)) in failures.iter() {
                if url.contains(pattern) {
                    return Some(ApiError::ApiRequestFailed {
                        status: *status,
                        url: url.to_string(),
                        message: message.clone(),
                    });
                }
            }
            None
        }

        fn find_response(
            map: &Mutex<HashMap<String, serde_json::Value>>,
            url: &str,
        ) -> Option<serde_json::Value> {
            let responses = map.lock().unwrap();
            for (pattern, response) in responses.iter() {
                if url.contains(pattern) {
                    return Some(response.clone());
                }
            }
            None
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            self.get_urls.lock().unwrap().push(url.to_string());

            if let Some(failure) = self.find_failure(url.as_str()) {
                return Err(failure);
            }

            let json = Self::find_response(&self.get_responses, url.as_str()).ok_or_else(|| {
                ApiError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                    message: "no canned GET response".to_string(),
                }
            })?;

            serde_json::from_value(json).map_err(Into::into)
        }

        async fn post_json<T: DeserializeOwned + Send>(
            &self,
            url: &Url,
            body: &serde_json::Value,
        ) -> ApiResult<T> {
            self.posts
                .lock()
                .unwrap()
                .push((url.to_string(), body.clone()));

            if let Some(failure) = self.find_failure(url.as_str()) {
                return Err(failure);
            }

            let json = Self::find_response(&self.post_responses, url.as_str()).ok_or_else(|| {
                ApiError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                    message: "no canned POST response".to_string(),
                }
            })?;

            serde_json::from_value(json).map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_from_json_body() {
        assert_eq!(
            extract_error_message(r#"{"message": "slug already exists"}"#),
            "slug already exists"
        );
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        assert_eq!(
            extract_error_message(r#"{"error": "no message field"}"#),
            r#"{"error": "no message field"}"#
        );
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_error_message(""), "");
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let config = ArcadeConfig {
            base_url: Url::parse("https://api.arcade.dev/v1").unwrap(),
            api_key: "arc_test".to_string(),
            org_id: "org_1".to_string(),
            project_id: "proj_1".to_string(),
            mcp_base: "https://api.arcade.dev/mcp".to_string(),
            user_agent: "arcdeploy-test".to_string(),
            timeout: std::time::Duration::from_secs(30),
        };
        let backend = ReqwestBackend::new(&config);
        assert_eq!(backend.api_key, "arc_test");
    }

    #[cfg(test)]
    mod fake_backend_tests {
        use super::testing::*;
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_get_response() {
            let backend =
                FakeBackend::new().with_get_response("/tools", json!({"items": [], "total_count": 0}));

            let url = Url::parse("https://example.com/v1/orgs/o/projects/p/tools").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result["total_count"], 0);
            assert_eq!(backend.get_urls().len(), 1);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("https://example.com/unknown").unwrap();

            let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(ApiError::ApiRequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_injected_failure() {
            let backend = FakeBackend::new().with_failure("/gateways", 503, "upstream down");
            let url = Url::parse("https://example.com/v1/orgs/o/projects/p/gateways").unwrap();

            let result: ApiResult<serde_json::Value> = backend.get_json(&url).await;
            match result {
                Err(ApiError::ApiRequestFailed {
                    status, message, ..
                }) => {
                    assert_eq!(status, 503);
                    assert_eq!(message, "upstream down");
                }
                other => panic!("expected injected failure, got {other:?}"),
            }
        }

        #[tokio::test]
        async fn test_fake_backend_records_posted_bodies() {
            let backend =
                FakeBackend::new().with_post_response("/gateways", json!({"slug": "assigned"}));

            let url = Url::parse("https://example.com/v1/orgs/o/projects/p/gateways").unwrap();
            let body = json!({"name": "Github MCP", "slug": "github"});
            let result: serde_json::Value = backend.post_json(&url, &body).await.unwrap();

            assert_eq!(result["slug"], "assigned");
            let posts = backend.posted();
            assert_eq!(posts.len(), 1);
            assert_eq!(posts[0].1, body);
        }
    }
}
