//! Deploy events - discriminated union for all deploy run progress.

use serde::{Deserialize, Serialize};

/// Single discriminated union for all deploy run events.
///
/// The driver emits these as the run progresses; consumers decide how to
/// present them (console lines, structured logs).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeployEvent {
    /// The deploy plan is ready.
    PlanReady {
        /// Number of toolkits in the plan.
        total: usize,
    },

    /// A toolkit was skipped because its slug is already deployed.
    ToolkitSkipped {
        /// 1-based position in the plan.
        position: usize,
        /// Number of toolkits in the plan.
        total: usize,
        /// Toolkit name.
        name: String,
    },

    /// Dry-run preview of a toolkit that would be deployed.
    ToolkitPreviewed {
        /// 1-based position in the plan.
        position: usize,
        /// Number of toolkits in the plan.
        total: usize,
        /// Toolkit name.
        name: String,
        /// Number of tools the gateway would expose.
        num_tools: usize,
        /// Slug the gateway would be created under.
        slug: String,
    },

    /// A deploy request is about to be issued.
    DeployStarted {
        /// 1-based position in the plan.
        position: usize,
        /// Number of toolkits in the plan.
        total: usize,
        /// Toolkit name.
        name: String,
        /// Number of tools the gateway will expose.
        num_tools: usize,
    },

    /// A deploy request succeeded.
    DeploySucceeded {
        /// 1-based position in the plan.
        position: usize,
        /// Toolkit name.
        name: String,
        /// Slug the service assigned.
        slug: String,
    },

    /// A deploy request failed.
    DeployFailed {
        /// 1-based position in the plan.
        position: usize,
        /// Toolkit name.
        name: String,
        /// Error detail, already truncated for display.
        error: String,
    },
}

impl DeployEvent {
    /// Create a plan ready event.
    #[must_use]
    pub const fn plan_ready(total: usize) -> Self {
        Self::PlanReady { total }
    }

    /// Create a toolkit skipped event.
    pub fn skipped(position: usize, total: usize, name: impl Into<String>) -> Self {
        Self::ToolkitSkipped {
            position,
            total,
            name: name.into(),
        }
    }

    /// Create a dry-run preview event.
    pub fn previewed(
        position: usize,
        total: usize,
        name: impl Into<String>,
        num_tools: usize,
        slug: impl Into<String>,
    ) -> Self {
        Self::ToolkitPreviewed {
            position,
            total,
            name: name.into(),
            num_tools,
            slug: slug.into(),
        }
    }

    /// Create a deploy started event.
    pub fn started(
        position: usize,
        total: usize,
        name: impl Into<String>,
        num_tools: usize,
    ) -> Self {
        Self::DeployStarted {
            position,
            total,
            name: name.into(),
            num_tools,
        }
    }

    /// Create a deploy succeeded event.
    pub fn succeeded(position: usize, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::DeploySucceeded {
            position,
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Create a deploy failed event.
    pub fn failed(position: usize, name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::DeployFailed {
            position,
            name: name.into(),
            error: error.into(),
        }
    }

    /// Get the toolkit name from any per-toolkit event type.
    #[must_use]
    pub fn toolkit(&self) -> Option<&str> {
        match self {
            Self::PlanReady { .. } => None,
            Self::ToolkitSkipped { name, .. }
            | Self::ToolkitPreviewed { name, .. }
            | Self::DeployStarted { name, .. }
            | Self::DeploySucceeded { name, .. }
            | Self::DeployFailed { name, .. } => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_toolkit_extraction() {
        assert_eq!(
            DeployEvent::skipped(1, 3, "Github").toolkit(),
            Some("Github")
        );
        assert_eq!(
            DeployEvent::failed(2, "Slack", "boom").toolkit(),
            Some("Slack")
        );
        assert!(DeployEvent::plan_ready(3).toolkit().is_none());
    }

    #[test]
    fn test_started_event_fields() {
        let event = DeployEvent::started(2, 5, "Github", 44);
        match event {
            DeployEvent::DeployStarted {
                position,
                total,
                num_tools,
                ..
            } => {
                assert_eq!(position, 2);
                assert_eq!(total, 5);
                assert_eq!(num_tools, 44);
            }
            _ => panic!("Expected DeployStarted"),
        }
    }
}
