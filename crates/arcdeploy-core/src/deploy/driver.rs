//! Sequential deploy driver.
//!
//! Runs the full deploy pipeline: list tools, group into toolkits, plan
//! slugs, then deploy each toolkit in order with a fixed pause between
//! calls. Per-toolkit failures are recorded and the loop continues; only
//! the initial tool listing is fatal.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::DeployConfig;
use crate::domain::group_tools;
use crate::ports::{DeployEventEmitterPort, GatewayPort, GatewayPortResult};

use super::events::DeployEvent;
use super::plan::DeployPlan;
use super::report::{FailedDeploy, McpRecord, RunReport};

/// Drives a full deploy run against a gateway.
pub struct DeployDriver {
    gateway: Arc<dyn GatewayPort>,
    emitter: Arc<dyn DeployEventEmitterPort>,
    config: DeployConfig,
}

impl DeployDriver {
    /// Create a driver over a gateway port.
    pub fn new(
        gateway: Arc<dyn GatewayPort>,
        emitter: Arc<dyn DeployEventEmitterPort>,
        config: DeployConfig,
    ) -> Self {
        Self {
            gateway,
            emitter,
            config,
        }
    }

    /// Run the deployment end to end and return the report.
    ///
    /// # Errors
    ///
    /// Returns an error only when the tool listing fails, since there is
    /// nothing to deploy without it. Per-toolkit failures land in the
    /// report instead.
    pub async fn run(&self) -> GatewayPortResult<RunReport> {
        let tools = self.gateway.list_tools().await?;
        let toolkits = group_tools(tools);
        let plan = DeployPlan::build(toolkits, self.config.slug_prefix.as_deref());
        info!(
            toolkits = plan.len(),
            dry_run = self.config.dry_run,
            "Deploy plan ready"
        );
        self.emitter.emit(DeployEvent::plan_ready(plan.len()));

        let existing = self.existing_slugs().await;

        let total = plan.len();
        let mut report = RunReport::default();

        for (index, item) in plan.items.iter().enumerate() {
            let position = index + 1;
            let name = item.toolkit.name.as_str();

            if existing.contains(&item.slug.to_lowercase()) {
                debug!(toolkit = %name, slug = %item.slug, "Already deployed, skipping");
                self.emitter
                    .emit(DeployEvent::skipped(position, total, name));
                report.skipped.push(name.to_string());
                continue;
            }

            if self.config.dry_run {
                self.emitter.emit(DeployEvent::previewed(
                    position,
                    total,
                    name,
                    item.toolkit.num_tools(),
                    item.slug.as_str(),
                ));
                report.records.push(McpRecord::new(
                    name,
                    &item.toolkit.description,
                    self.config.mcp_url(&item.slug),
                    item.toolkit.num_tools(),
                ));
                continue;
            }

            self.emitter.emit(DeployEvent::started(
                position,
                total,
                name,
                item.toolkit.num_tools(),
            ));
            match self.gateway.create_gateway(&item.spec()).await {
                Ok(created) => {
                    info!(toolkit = %name, slug = %created.slug, "Deployed");
                    self.emitter
                        .emit(DeployEvent::succeeded(position, name, created.slug.as_str()));
                    report.records.push(McpRecord::new(
                        name,
                        &item.toolkit.description,
                        created.url,
                        item.toolkit.num_tools(),
                    ));
                }
                Err(err) => {
                    warn!(toolkit = %name, error = %err, "Deploy failed");
                    let failure = FailedDeploy::new(name, &err.to_string());
                    self.emitter
                        .emit(DeployEvent::failed(position, name, failure.error.as_str()));
                    report.failures.push(failure);
                }
            }

            // Flat rate-limit pause, skipped after the final toolkit
            if position < total {
                tokio::time::sleep(self.config.deploy_delay).await;
            }
        }

        Ok(report)
    }

    /// Slugs of gateways already deployed, lowercased for comparison.
    ///
    /// A listing failure is treated as an empty set so a project without
    /// any gateways yet does not abort the run.
    async fn existing_slugs(&self) -> HashSet<String> {
        match self.gateway.list_gateways().await {
            Ok(gateways) => gateways
                .into_iter()
                .map(|g| g.slug.to_lowercase())
                .collect(),
            Err(err) => {
                warn!(error = %err, "Could not list existing gateways; assuming none");
                HashSet::new()
            }
        }
    }
}
