//! Deploy pipeline: plan, drive, report.
//!
//! # Structure
//!
//! - `plan` - Slug resolution and payload synthesis
//! - `driver` - The sequential deploy loop
//! - `events` - Progress events emitted during a run
//! - `report` - Run outcome types
//! - `csv` - Report file output

pub mod csv;
pub mod driver;
pub mod events;
pub mod plan;
pub mod report;

// Re-export the pipeline types at the deploy level for convenience
pub use self::csv::{DEFAULT_REPORT_PATH, ReportWriteError, write_records};
pub use driver::DeployDriver;
pub use events::DeployEvent;
pub use plan::{DeployPlan, PlannedDeploy};
pub use report::{FailedDeploy, McpRecord, RunReport};
