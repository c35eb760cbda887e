//! Main entry point for the pathkit CLI.
//!
//! This is the command-line interface for the pathkit path engine.
//! It provides commands for working with path strings:
//! - `join`, `resolve`, `normalize`, `relative`: combine and simplify paths
//! - `parse`, `format`: split a path into parts and back
//! - `basename`, `dirname`, `extension`, `is-absolute`: inspect a path
//! - `convert`, `case`: rewrite separators and identifiers

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::{select_logger, GlobalOptions};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        platform: cli.platform,
        cwd: cli.cwd,
        config_file: cli.config,
    };

    // Route library trace points through the selected logger
    if select_logger(&global).install().is_err() {
        eprintln!("Warning: a logger was already installed");
    }

    // Execute the command
    let result = match cli.command {
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Extension(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Case(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
