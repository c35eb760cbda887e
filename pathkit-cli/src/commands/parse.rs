//! Command to decompose a path into its parts.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathkit::{path, OutputFormat, ParseMode};
use std::path::PathBuf;

/// Split a path into dir, base, filename and extension.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format (defaults to the configured format, then json)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Emit a key/value mapping that omits an empty extension
    #[arg(long)]
    pub assoc: bool,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mode = if self.assoc {
            ParseMode::Assoc
        } else {
            ParseMode::Object
        };

        let parsed = path::parse(&self.path, mode, config.effective_platform())?;
        let format = self
            .format
            .unwrap_or_else(|| config.effective_output_format());
        let output = format.create_formatter().format(&parsed)?;

        println!("{}", output.trim_end());
        Ok(())
    }
}
