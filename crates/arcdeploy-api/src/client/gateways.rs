//! Gateway listing and creation for the Arcade gateway client.

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{CreateGatewayRequest, CreateGatewayResponse, GatewayItem, GatewaysPage};
use crate::url::build_gateways_url;

use super::GatewayClient;

impl<B: HttpBackend> GatewayClient<B> {
    /// Fetch the gateways already deployed in the project.
    pub(crate) async fn fetch_gateways(&self) -> ApiResult<Vec<GatewayItem>> {
        let url = build_gateways_url(&self.config);
        let page: GatewaysPage = self.backend.get_json(&url).await?;
        Ok(page.items)
    }

    /// Create a new gateway in the project.
    pub(crate) async fn create_gateway_raw(
        &self,
        request: &CreateGatewayRequest,
    ) -> ApiResult<CreateGatewayResponse> {
        let url = build_gateways_url(&self.config);
        let body = serde_json::to_value(request)?;
        self.backend.post_json(&url, &body).await
    }
}
