//! Shared CLI presentation utilities.
//!
//! This module provides the console renderer for deploy progress plus
//! reusable formatting helpers for consistent CLI output across commands.

pub mod console;
pub mod tables;

pub use console::ConsoleEmitter;
pub use tables::{print_separator, truncate_string};
