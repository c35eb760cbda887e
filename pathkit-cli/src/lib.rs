//! Library exports for pathkit-cli.
//!
//! This module exports the CLI structure so the command tree can be
//! inspected by tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;
