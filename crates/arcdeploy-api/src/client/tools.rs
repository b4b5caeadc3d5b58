//! Project tool listing for the Arcade gateway client.

use tracing::debug;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ToolItem, ToolsPage};
use crate::url::build_tools_url;

use super::GatewayClient;

/// Tools fetched per page of the listing endpoint.
const PAGE_LIMIT: usize = 100;

/// Hard cap on listing pages.
const MAX_PAGES: usize = 100;

impl<B: HttpBackend> GatewayClient<B> {
    /// Fetch every tool in the project, following pagination.
    ///
    /// Pages are requested until the reported `total_count` is reached or a
    /// short page signals the end of the listing.
    pub(crate) async fn fetch_all_tools(&self) -> ApiResult<Vec<ToolItem>> {
        let mut tools: Vec<ToolItem> = Vec::new();
        let mut offset = 0;

        loop {
            let url = build_tools_url(&self.config, PAGE_LIMIT, offset);
            let page: ToolsPage = self.backend.get_json(&url).await?;

            let fetched = page.items.len();
            tools.extend(page.items);

            let total = page.total_count.unwrap_or(fetched);
            debug!(fetched = tools.len(), total, "Fetched tools page");

            if tools.len() >= total || fetched < PAGE_LIMIT {
                break;
            }

            offset += PAGE_LIMIT;

            // Safety limit to prevent infinite loops
            if offset >= PAGE_LIMIT * MAX_PAGES {
                break;
            }
        }

        Ok(tools)
    }
}
