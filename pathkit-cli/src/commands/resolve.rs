//! Command to resolve fragments to an absolute path.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathkit::path;
use std::path::PathBuf;

/// Resolve fragments right to left into an absolute, normalized path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Fragments to resolve; with none, prints the current directory
    #[arg(value_name = "FRAGMENT")]
    pub fragments: Vec<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, ctx) = load_context(global)?;
        let resolved = path::resolve(&self.fragments, &ctx)?;
        println!("{resolved}");
        Ok(())
    }
}
