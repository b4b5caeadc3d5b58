//! Command handlers for arcdeploy commands.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Validate CLI-specific input
//!   2. Drive the core deploy pipeline through the gateway port
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Construct API clients directly (that belongs to bootstrap)
//! - Contain deploy sequencing logic (that belongs to the core driver)

pub mod deploy;
pub mod toolkits;
