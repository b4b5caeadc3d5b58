//! Gateway client port definitions.
//!
//! This module defines the port trait and DTOs for talking to the hosted
//! gateway service. The actual implementation lives in `arcdeploy-api`.

mod client;
mod error;
mod types;

pub use client::GatewayPort;
pub use error::{GatewayPortError, GatewayPortResult};
pub use types::{CreatedGateway, GatewaySpec, GatewaySummary};
