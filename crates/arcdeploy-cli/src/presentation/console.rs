//! Console renderer for deploy progress events.

use std::io::Write;

use arcdeploy_core::{DeployEvent, DeployEventEmitterPort};

/// Renders deploy events as console lines, one toolkit per line.
///
/// A deploy attempt prints its prefix immediately and completes the line
/// once the outcome arrives, so the console tracks the pace of the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter;

impl ConsoleEmitter {
    /// Create a new console emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DeployEventEmitterPort for ConsoleEmitter {
    fn emit(&self, event: DeployEvent) {
        match event {
            DeployEvent::PlanReady { total } => {
                println!("Found {total} toolkits");
                println!();
            }
            DeployEvent::ToolkitSkipped {
                position,
                total,
                name,
            } => {
                println!("[{position}/{total}] SKIP {name}");
            }
            DeployEvent::ToolkitPreviewed {
                position,
                total,
                name,
                num_tools,
                slug,
            } => {
                println!("[{position}/{total}] WOULD DEPLOY {name} ({num_tools} tools) → {slug}");
            }
            DeployEvent::DeployStarted {
                position,
                total,
                name,
                num_tools,
            } => {
                print!("[{position}/{total}] DEPLOY {name} ({num_tools} tools)... ");
                let _ = std::io::stdout().flush();
            }
            DeployEvent::DeploySucceeded { slug, .. } => {
                println!("✓ {slug}");
            }
            DeployEvent::DeployFailed { error, .. } => {
                println!("✗ {error}");
            }
        }
    }

    fn clone_box(&self) -> Box<dyn DeployEventEmitterPort> {
        Box::new(*self)
    }
}
