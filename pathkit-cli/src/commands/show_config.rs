//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathkit::path;

/// Show the platform, separators and directory the other commands use.
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, ctx) = load_context(global)?;
        let platform = ctx.platform();

        println!("platform: {platform}");
        println!("separator: {}", platform.separator());
        println!("delimiter: {}", path::delimiter(platform));
        println!("cwd: {}", ctx.current_directory());
        println!("output_format: {}", config.effective_output_format());
        Ok(())
    }
}
