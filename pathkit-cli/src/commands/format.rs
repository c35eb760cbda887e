//! Command to build a path from its parts.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathkit::path;
use std::collections::BTreeMap;

/// Assemble a path from a directory and a base name.
///
/// When `--base` is omitted, `--filename` plus an optional `--extension`
/// stands in for it.
#[derive(Args)]
pub struct FormatCommand {
    /// Directory part
    #[arg(long)]
    pub dir: Option<String>,

    /// Last segment, extension included
    #[arg(long)]
    pub base: Option<String>,

    /// Last segment without its extension
    #[arg(long, conflicts_with = "base")]
    pub filename: Option<String>,

    /// Extension, with or without the leading dot
    #[arg(long, requires = "filename")]
    pub extension: Option<String>,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let parts: BTreeMap<String, String> = [
            ("dir", self.dir),
            ("base", self.base),
            ("filename", self.filename),
            ("extension", self.extension),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect();

        println!("{}", path::format(&parts, config.effective_platform())?);
        Ok(())
    }
}
