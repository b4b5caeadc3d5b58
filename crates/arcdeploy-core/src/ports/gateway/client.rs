//! Gateway client port trait.

use super::error::GatewayPortResult;
use super::types::{CreatedGateway, GatewaySpec, GatewaySummary};
use crate::domain::ToolRecord;
use async_trait::async_trait;

/// Port trait for hosted gateway operations.
///
/// This trait defines the interface the deploy driver uses to talk to the
/// gateway service. The implementation lives in `arcdeploy-api`.
///
/// # Design
///
/// - Uses core-owned DTOs, not gateway API types
/// - Returns `GatewayPortError` for all failures
/// - Async methods for network operations
/// - Org and project scoping belongs to the implementation's configuration,
///   not to call sites
#[async_trait]
pub trait GatewayPort: Send + Sync {
    /// List every tool available to the project, across all pages.
    async fn list_tools(&self) -> GatewayPortResult<Vec<ToolRecord>>;

    /// List gateways already deployed in the project.
    async fn list_gateways(&self) -> GatewayPortResult<Vec<GatewaySummary>>;

    /// Create a new gateway exposing the given tools.
    async fn create_gateway(&self, spec: &GatewaySpec) -> GatewayPortResult<CreatedGateway>;
}
