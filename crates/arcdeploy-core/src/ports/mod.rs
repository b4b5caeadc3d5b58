//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - No gateway API wire formats; adapters map those to core DTOs
//! - Traits are minimal and intent-based

pub mod deploy_event_emitter;
pub mod gateway;

// Re-export port traits for convenience
pub use deploy_event_emitter::{DeployEventEmitterPort, NoopDeployEmitter};
pub use gateway::{
    CreatedGateway, GatewayPort, GatewayPortError, GatewayPortResult, GatewaySpec, GatewaySummary,
};
