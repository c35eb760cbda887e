//! Command to normalize a path.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathkit::path;
use std::path::PathBuf;

/// Collapse separators and `.`/`..` segments of a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, ctx) = load_context(global)?;
        println!("{}", path::normalize(&self.path, &ctx)?);
        Ok(())
    }
}
