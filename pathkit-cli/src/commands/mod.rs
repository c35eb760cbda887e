//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `join`: Join fragments with the platform separator
//! - `resolve`: Resolve fragments to an absolute path
//! - `normalize`: Collapse separators and dot segments
//! - `relative`: Relative path between two locations
//! - `parse`: Decompose a path into its parts
//! - `format`: Assemble a path from its parts
//! - `components`: `basename`, `dirname` and `extension`
//! - `is_absolute`: Assert that a path is absolute
//! - `convert`: Rewrite separators for another platform
//! - `case`: Change the casing of an identifier
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod case;
pub mod completions;
pub mod components;
pub mod convert;
pub mod format;
pub mod is_absolute;
pub mod join;
pub mod normalize;
pub mod parse;
pub mod relative;
pub mod resolve;
pub mod show_config;

pub use case::CaseCommand;
pub use completions::CompletionsCommand;
pub use components::{BasenameCommand, DirnameCommand, ExtensionCommand};
pub use convert::ConvertCommand;
pub use format::FormatCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
