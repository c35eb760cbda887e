//! Command to rewrite separators for another platform.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::{path, Platform};

/// Rewrite every separator of PATH for the target platform.
#[derive(Args)]
pub struct ConvertCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Target platform
    #[arg(long, value_enum)]
    pub to: Platform,
}

impl ConvertCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let converted = match self.to {
            Platform::Windows => path::to_windows(&self.path),
            Platform::Posix => path::to_posix(&self.path),
        };
        println!("{converted}");
        Ok(())
    }
}
