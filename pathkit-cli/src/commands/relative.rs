//! Command to compute the relative path between two locations.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathkit::path;
use std::path::PathBuf;

/// Print the relative path from FROM to TO.
///
/// Both arguments are resolved first; identical locations print an empty line.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting location
    #[arg(value_name = "FROM")]
    pub from: PathBuf,

    /// Target location
    #[arg(value_name = "TO")]
    pub to: PathBuf,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, ctx) = load_context(global)?;
        let rel = path::relative(&self.from, &self.to, &ctx)?;
        if global.verbose {
            eprintln!("Resolved against: {}", ctx.current_directory());
        }
        println!("{rel}");
        Ok(())
    }
}
