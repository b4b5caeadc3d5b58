#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod deploy;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_DEPLOY_DELAY, DEFAULT_MCP_BASE, DeployConfig};
pub use deploy::{
    DEFAULT_REPORT_PATH, DeployDriver, DeployEvent, DeployPlan, FailedDeploy, McpRecord,
    PlannedDeploy, ReportWriteError, RunReport, write_records,
};
pub use domain::{ToolRecord, Toolkit, gateway_slug, group_tools, toolkit_slug};
pub use ports::{
    CreatedGateway, DeployEventEmitterPort, GatewayPort, GatewayPortError, GatewayPortResult,
    GatewaySpec, GatewaySummary, NoopDeployEmitter,
};
