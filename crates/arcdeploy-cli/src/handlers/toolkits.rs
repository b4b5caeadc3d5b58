//! Toolkits command handler.
//!
//! Displays the toolkits available in the project as a formatted table.

use anyhow::Result;

use arcdeploy_core::group_tools;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Execute the toolkits command.
///
/// Retrieves all tools in the project and displays them grouped by toolkit
/// with tool counts and descriptions.
///
/// # Errors
///
/// Fails when the tool listing cannot be fetched.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("Fetching tools...");
    let tools = ctx.gateway().list_tools().await.map_err(CliError::from)?;
    let toolkits = group_tools(tools);

    if toolkits.is_empty() {
        println!("No toolkits found in this project.");
        return Ok(());
    }

    println!("Found {} toolkit(s):\n", toolkits.len());
    println!("{:<25} {:>6}  Description", "Toolkit", "Tools");
    print_separator(80);

    for toolkit in &toolkits {
        println!(
            "{:<25} {:>6}  {}",
            truncate_string(&toolkit.name, 24),
            toolkit.num_tools(),
            truncate_string(&toolkit.description, 45)
        );
    }

    Ok(())
}
