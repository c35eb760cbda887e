//! Commands printing a single component of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathkit::path;

/// Print the last segment of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", path::basename(&self.path, config.effective_platform()));
        Ok(())
    }
}

/// Print everything before the last segment of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", path::dirname(&self.path, config.effective_platform()));
        Ok(())
    }
}

/// Print the extension of a path, without the dot.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtensionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        println!("{}", path::extension(&self.path, config.effective_platform()));
        Ok(())
    }
}
