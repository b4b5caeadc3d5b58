//! Core-owned DTOs for gateway port operations.

use serde::{Deserialize, Serialize};

/// An already-deployed gateway, as reported by the listing endpoint.
///
/// Only the slug matters for deployment planning; everything else the
/// service reports about a gateway is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySummary {
    /// URL slug of the deployed gateway.
    pub slug: String,
}

/// Request payload for creating a gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySpec {
    /// Display name of the gateway.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Requested URL slug.
    pub slug: String,
    /// Fully qualified tool names the gateway exposes.
    pub allowed_tools: Vec<String>,
}

/// A gateway created by the deploy endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedGateway {
    /// Slug the service assigned. May differ from the requested slug.
    pub slug: String,
    /// Public MCP endpoint URL for the new gateway.
    pub url: String,
}
