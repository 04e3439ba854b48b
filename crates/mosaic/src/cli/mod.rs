//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mosaic binary.

mod browse;
mod build;
mod commands;

pub use browse::{browse, browse_into};
pub use build::build;
pub use commands::{BrowseArgs, BuildArgs, Cli, Commands};
