//! Deploy planning.
//!
//! Planning turns grouped toolkits into an ordered list of deployments with
//! their gateway slugs resolved. The plan is pure data; the driver decides
//! per item whether to deploy, preview, or skip.

use crate::domain::{Toolkit, gateway_slug};
use crate::ports::gateway::GatewaySpec;

/// One toolkit scheduled for deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedDeploy {
    /// The toolkit to deploy.
    pub toolkit: Toolkit,
    /// Gateway slug the deployment will request, prefix applied.
    pub slug: String,
}

impl PlannedDeploy {
    /// Build the creation payload for this toolkit's gateway.
    ///
    /// The gateway name is `{toolkit} MCP`; a missing toolkit description
    /// falls back to `MCP for {toolkit}`.
    #[must_use]
    pub fn spec(&self) -> GatewaySpec {
        let description = if self.toolkit.description.is_empty() {
            format!("MCP for {}", self.toolkit.name)
        } else {
            self.toolkit.description.clone()
        };
        GatewaySpec {
            name: format!("{} MCP", self.toolkit.name),
            description,
            slug: self.slug.clone(),
            allowed_tools: self.toolkit.tools.clone(),
        }
    }
}

/// The ordered deploy plan for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeployPlan {
    /// Planned deployments, in attempt order.
    pub items: Vec<PlannedDeploy>,
}

impl DeployPlan {
    /// Build a plan from grouped toolkits, preserving their order.
    ///
    /// [`group_tools`](crate::domain::group_tools) orders toolkits by name,
    /// so a plan built from its output is attempted alphabetically.
    #[must_use]
    pub fn build(toolkits: Vec<Toolkit>, slug_prefix: Option<&str>) -> Self {
        let items = toolkits
            .into_iter()
            .map(|toolkit| {
                let slug = gateway_slug(&toolkit.name, slug_prefix);
                PlannedDeploy { toolkit, slug }
            })
            .collect();
        Self { items }
    }

    /// Number of planned deployments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the plan is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
