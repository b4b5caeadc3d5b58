//! Port trait implementation for `GatewayClient`.
//!
//! This module implements the core-owned `GatewayPort` trait for
//! `GatewayClient`, handling the conversion between internal Arcade wire
//! types and core DTOs.

use async_trait::async_trait;
use arcdeploy_core::domain::ToolRecord;
use arcdeploy_core::ports::{
    CreatedGateway, GatewayPort, GatewayPortError, GatewayPortResult, GatewaySpec, GatewaySummary,
};

use crate::client::GatewayClient;
use crate::error::ApiError;
use crate::http::HttpBackend;
use crate::models::{CreateGatewayRequest, ToolFilter, ToolItem};
use crate::url::build_mcp_url;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `GatewayPortError`.
fn map_error(err: ApiError) -> GatewayPortError {
    match err {
        ApiError::ApiRequestFailed {
            status, message, ..
        } => match status {
            401 | 403 => GatewayPortError::AuthFailed { message },
            429 => GatewayPortError::RateLimited { message },
            _ => GatewayPortError::Upstream { status, message },
        },
        ApiError::InvalidResponse { message } => GatewayPortError::InvalidResponse { message },
        ApiError::Network(e) => GatewayPortError::Network {
            message: e.to_string(),
        },
        ApiError::InvalidUrl(e) => GatewayPortError::Configuration {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => GatewayPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Flatten wire tool items into core tool records.
///
/// Items without a toolkit name or a qualified name are dropped; the gateway
/// occasionally lists half-registered tools that carry neither.
fn to_tool_records(items: Vec<ToolItem>) -> Vec<ToolRecord> {
    items
        .into_iter()
        .filter_map(|item| {
            let toolkit = item.toolkit?;
            let name = toolkit.name?;
            let qualified_name = item.qualified_name?;
            Some(ToolRecord::new(
                qualified_name,
                name,
                toolkit.description.unwrap_or_default(),
            ))
        })
        .collect()
}

/// Convert a core `GatewaySpec` into the creation request body.
fn to_gateway_request(spec: &GatewaySpec) -> CreateGatewayRequest {
    CreateGatewayRequest {
        name: spec.name.clone(),
        description: spec.description.clone(),
        slug: spec.slug.clone(),
        status: "active".to_string(),
        auth_type: "arcade".to_string(),
        tool_filter: ToolFilter {
            allowed_tools: spec.allowed_tools.clone(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> GatewayPort for GatewayClient<B> {
    async fn list_tools(&self) -> GatewayPortResult<Vec<ToolRecord>> {
        let items = self.fetch_all_tools().await.map_err(map_error)?;
        Ok(to_tool_records(items))
    }

    async fn list_gateways(&self) -> GatewayPortResult<Vec<GatewaySummary>> {
        let items = self.fetch_gateways().await.map_err(map_error)?;
        Ok(items
            .into_iter()
            .map(|gateway| GatewaySummary {
                slug: gateway.slug.unwrap_or_default(),
            })
            .collect())
    }

    async fn create_gateway(&self, spec: &GatewaySpec) -> GatewayPortResult<CreatedGateway> {
        let request = to_gateway_request(spec);
        let response = self.create_gateway_raw(&request).await.map_err(map_error)?;

        // The API may normalize the slug; the public URL follows whatever it
        // actually assigned.
        let slug = response.slug.unwrap_or_else(|| spec.slug.clone());
        let url = build_mcp_url(&self.config, &slug);

        Ok(CreatedGateway { slug, url })
    }
}
