//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP, filesystem, etc.).
//!
//! # Structure
//!
//! - `toolkit` - Tool listing and toolkit grouping types
//! - `slug` - Gateway slug derivation

pub mod slug;
pub mod toolkit;

// Re-export toolkit types at the domain level for convenience
pub use toolkit::{ToolRecord, Toolkit, group_tools};

// Re-export slug helpers at the domain level for convenience
pub use slug::{gateway_slug, toolkit_slug};
