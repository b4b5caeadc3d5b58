//! CLI entry point for arcdeploy.
//!
//! Wires the pieces together: environment loading, argument parsing,
//! logging, bootstrap, and command dispatch.

use clap::{CommandFactory, Parser};

use arcdeploy_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `--verbose` enables debug-level
/// records; the default stays at warnings so driver logs do not repeat
/// what the console output already shows.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<CliError>()
            .map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env()?;
    let ctx = bootstrap(config);

    match command {
        Commands::Deploy {
            dry_run,
            prefix,
            delay,
            out,
        } => {
            let args = handlers::deploy::DeployArgs {
                dry_run,
                prefix,
                delay,
                out,
            };
            handlers::deploy::execute(&ctx, args).await?;
        }
        Commands::Toolkits => {
            handlers::toolkits::execute(&ctx).await?;
        }
    }

    Ok(())
}
