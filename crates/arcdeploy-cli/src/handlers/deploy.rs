//! Deploy command handler.
//!
//! Drives a full deploy run and writes the CSV deployment report.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use arcdeploy_core::{DeployConfig, DeployDriver, write_records};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::ConsoleEmitter;

/// Arguments for the deploy command.
#[derive(Debug, Clone)]
pub struct DeployArgs {
    /// Preview the deploy plan without creating anything.
    pub dry_run: bool,
    /// Slug prefix override. Falls back to the configured prefix.
    pub prefix: Option<String>,
    /// Seconds to pause between gateway creation calls.
    pub delay: u64,
    /// Path of the CSV deployment report.
    pub out: PathBuf,
}

/// Execute the deploy command.
///
/// Lists the project's tools, deploys one MCP gateway per toolkit, and
/// writes the deployment report CSV.
///
/// # Errors
///
/// Fails when the tool listing cannot be fetched or the report cannot be
/// written. Per-toolkit deploy failures are counted in the summary and do
/// not fail the command.
pub async fn execute(ctx: &CliContext, args: DeployArgs) -> Result<()> {
    let config = ctx.config();
    let prefix = args.prefix.or_else(|| config.slug_prefix.clone());

    match &prefix {
        Some(prefix) => println!(
            "Org: {} | Project: {} | Prefix: {prefix}",
            config.org_id, config.project_id
        ),
        None => println!("Org: {} | Project: {}", config.org_id, config.project_id),
    }
    if args.dry_run {
        println!("DRY RUN - No MCPs will be deployed");
    }
    println!();
    println!("Fetching tools...");

    let deploy_config = DeployConfig::new()
        .with_optional_slug_prefix(prefix)
        .with_deploy_delay(Duration::from_secs(args.delay))
        .with_dry_run(args.dry_run)
        .with_mcp_base(ctx.config().mcp_base.as_str());

    let driver = DeployDriver::new(
        ctx.gateway(),
        Arc::new(ConsoleEmitter::new()),
        deploy_config,
    );
    let report = driver.run().await.map_err(CliError::from)?;

    println!();
    println!("{}", report.summary_line());

    write_records(&args.out, &report.records).map_err(CliError::from)?;
    println!("Saved to {}", args.out.display());

    Ok(())
}
