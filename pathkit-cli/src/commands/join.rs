//! Command to join path fragments.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathkit::path;
use std::path::PathBuf;

/// Join fragments with the platform separator and collapse duplicates.
#[derive(Args)]
pub struct JoinCommand {
    /// Fragments to join, left to right
    #[arg(value_name = "FRAGMENT", required = true)]
    pub fragments: Vec<PathBuf>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let joined = path::join(&self.fragments, config.effective_platform())?;
        println!("{joined}");
        Ok(())
    }
}
