//! Deploy run report types.
//!
//! A run accumulates one record per deployed (or previewed) toolkit, one
//! entry per skipped toolkit, and one failure per toolkit whose deploy call
//! was rejected. The report is terminal: it is rendered once at the end of
//! the run and the process exits.

use serde::{Deserialize, Serialize};

/// Maximum characters of toolkit description carried into a record.
const MAX_DESCRIPTION_CHARS: usize = 200;

/// Maximum characters of error detail carried into a failure.
const MAX_ERROR_CHARS: usize = 50;

/// Truncate a string to at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// A successfully deployed (or previewed) MCP.
///
/// Field names match the CSV columns of the output file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpRecord {
    /// Toolkit name the MCP was created for.
    pub mcp: String,
    /// Toolkit description, truncated to 200 characters.
    pub description: String,
    /// Public MCP endpoint URL.
    pub url: String,
    /// Number of tools the MCP exposes.
    pub num_tools: usize,
}

impl McpRecord {
    /// Create a record, truncating the description for output.
    pub fn new(
        mcp: impl Into<String>,
        description: &str,
        url: impl Into<String>,
        num_tools: usize,
    ) -> Self {
        Self {
            mcp: mcp.into(),
            description: truncate_chars(description, MAX_DESCRIPTION_CHARS),
            url: url.into(),
            num_tools,
        }
    }
}

/// A per-toolkit deploy failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDeploy {
    /// Toolkit name whose deploy call failed.
    pub name: String,
    /// Error detail, truncated to 50 characters.
    pub error: String,
}

impl FailedDeploy {
    /// Create a failure record, truncating the error for display.
    pub fn new(name: impl Into<String>, error: &str) -> Self {
        Self {
            name: name.into(),
            error: truncate_chars(error, MAX_ERROR_CHARS),
        }
    }
}

/// Complete outcome of a deploy run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Records for deployed (or previewed) MCPs, in attempt order.
    pub records: Vec<McpRecord>,
    /// Names of toolkits skipped because their slug was already deployed.
    pub skipped: Vec<String>,
    /// Per-toolkit deploy failures, in attempt order.
    pub failures: Vec<FailedDeploy>,
}

impl RunReport {
    /// Number of toolkits deployed (or previewed in dry-run).
    #[must_use]
    pub fn deployed_count(&self) -> usize {
        self.records.len()
    }

    /// Number of toolkits skipped.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of toolkits whose deploy call failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Format the one-line run summary.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Done: {} deployed, {} skipped, {} failed",
            self.deployed_count(),
            self.skipped_count(),
            self.failed_count()
        )
    }
}
