//! Toolkit grouping.
//!
//! The gateway's tool listing is flat: one entry per tool, each carrying its
//! toolkit's name and description. Deployment operates per toolkit, so the
//! flat listing is grouped here before planning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single tool entry from the gateway's flat tool listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Fully qualified tool name (e.g. `Github.ListRepositories`).
    pub qualified_name: String,
    /// Name of the toolkit this tool belongs to.
    pub toolkit_name: String,
    /// Toolkit description as reported alongside this tool.
    /// Empty when the gateway reports none.
    #[serde(default)]
    pub toolkit_description: String,
}

impl ToolRecord {
    /// Create a tool record.
    pub fn new(
        qualified_name: impl Into<String>,
        toolkit_name: impl Into<String>,
        toolkit_description: impl Into<String>,
    ) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            toolkit_name: toolkit_name.into(),
            toolkit_description: toolkit_description.into(),
        }
    }
}

/// A named bundle of tools, assembled from the flat tool listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolkit {
    /// Toolkit name as reported by the gateway.
    pub name: String,
    /// Toolkit description. Empty when the gateway reports none.
    pub description: String,
    /// Fully qualified names of the toolkit's tools, in listing order.
    pub tools: Vec<String>,
}

impl Toolkit {
    /// Number of tools in this toolkit.
    #[must_use]
    pub fn num_tools(&self) -> usize {
        self.tools.len()
    }
}

/// Group a flat tool listing into toolkits, ordered by toolkit name.
///
/// The description reported with the last tool of a toolkit wins; the
/// gateway repeats the same description on every tool, so this only matters
/// for inconsistent listings.
#[must_use]
pub fn group_tools(records: Vec<ToolRecord>) -> Vec<Toolkit> {
    let mut grouped: BTreeMap<String, (String, Vec<String>)> = BTreeMap::new();
    for record in records {
        let entry = grouped.entry(record.toolkit_name).or_default();
        entry.0 = record.toolkit_description;
        entry.1.push(record.qualified_name);
    }
    grouped
        .into_iter()
        .map(|(name, (description, tools))| Toolkit {
            name,
            description,
            tools,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_tools_by_toolkit_name() {
        let records = vec![
            ToolRecord::new("Github.ListRepos", "Github", "Tools for GitHub"),
            ToolRecord::new("Slack.SendMessage", "Slack", "Tools for Slack"),
            ToolRecord::new("Github.CreateIssue", "Github", "Tools for GitHub"),
        ];

        let toolkits = group_tools(records);

        assert_eq!(toolkits.len(), 2);
        assert_eq!(toolkits[0].name, "Github");
        assert_eq!(toolkits[0].description, "Tools for GitHub");
        assert_eq!(
            toolkits[0].tools,
            vec!["Github.ListRepos", "Github.CreateIssue"]
        );
        assert_eq!(toolkits[1].name, "Slack");
        assert_eq!(toolkits[1].tools, vec!["Slack.SendMessage"]);
    }

    #[test]
    fn test_group_tools_orders_by_name() {
        let records = vec![
            ToolRecord::new("Zendesk.CreateTicket", "Zendesk", ""),
            ToolRecord::new("Asana.CreateTask", "Asana", ""),
            ToolRecord::new("Math.Add", "Math", ""),
        ];

        let names: Vec<_> = group_tools(records)
            .into_iter()
            .map(|tk| tk.name)
            .collect();

        assert_eq!(names, vec!["Asana", "Math", "Zendesk"]);
    }

    #[test]
    fn test_group_tools_empty_listing() {
        assert!(group_tools(Vec::new()).is_empty());
    }

    #[test]
    fn test_num_tools() {
        let toolkit = Toolkit {
            name: "Github".to_string(),
            description: String::new(),
            tools: vec!["Github.A".to_string(), "Github.B".to_string()],
        };
        assert_eq!(toolkit.num_tools(), 2);
    }
}
