//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CaseCommand, CompletionsCommand, ConvertCommand, DirnameCommand,
    ExtensionCommand, FormatCommand, IsAbsoluteCommand, JoinCommand, NormalizeCommand,
    ParseCommand, RelativeCommand, ResolveCommand, ShowConfigCommand,
};
use clap::{Parser, Subcommand};
use pathkit::Platform;
use std::path::PathBuf;

/// Command-line tool for manipulating filesystem paths as strings.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(version, about = "Join, normalize, resolve and parse paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path rules to apply
    #[arg(long, value_enum, global = true, env = "PATHKIT_PLATFORM")]
    pub platform: Option<Platform>,

    /// Directory relative paths resolve against (must be absolute)
    #[arg(long, value_name = "DIR", global = true, env = "PATHKIT_CWD")]
    pub cwd: Option<String>,

    /// Configuration file layered over the user configuration
    #[arg(long, value_name = "FILE", global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Join fragments with the platform separator
    Join(JoinCommand),

    /// Resolve fragments to an absolute path
    Resolve(ResolveCommand),

    /// Collapse separators and dot segments
    Normalize(NormalizeCommand),

    /// Print the relative path between two locations
    Relative(RelativeCommand),

    /// Decompose a path into its parts
    Parse(ParseCommand),

    /// Assemble a path from its parts
    Format(FormatCommand),

    /// Print the last segment of a path
    Basename(BasenameCommand),

    /// Print the directory part of a path
    Dirname(DirnameCommand),

    /// Print the extension of a path
    Extension(ExtensionCommand),

    /// Assert that a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Rewrite separators for another platform
    Convert(ConvertCommand),

    /// Change the casing of an identifier
    Case(CaseCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
