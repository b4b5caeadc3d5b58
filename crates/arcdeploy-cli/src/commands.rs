//! Subcommand definitions for the arcdeploy CLI.

use std::path::PathBuf;

use clap::Subcommand;

use arcdeploy_core::DEFAULT_REPORT_PATH;

/// Available commands for the Arcade MCP deployment tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Deploy one hosted MCP server per toolkit in the project
    Deploy {
        /// Preview the deploy plan without creating anything
        #[arg(long)]
        dry_run: bool,

        /// Slug prefix for created gateways (overrides GATEWAY_SLUG_PREFIX)
        #[arg(long)]
        prefix: Option<String>,

        /// Seconds to pause between gateway creation calls
        #[arg(long, default_value = "10")]
        delay: u64,

        /// Path of the CSV deployment report
        #[arg(long, default_value = DEFAULT_REPORT_PATH)]
        out: PathBuf,
    },

    /// List the toolkits available in the project
    Toolkits,
}
