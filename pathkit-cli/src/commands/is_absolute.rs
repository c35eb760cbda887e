//! Command to assert that a path is absolute.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathkit::path;

/// Succeed when PATH is absolute under the active platform.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the assertion (fail if the path is absolute)
    #[arg(long)]
    pub not: bool,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let platform = config.effective_platform();
        let absolute = path::is_absolute(&self.path, platform);

        let success = if self.not { !absolute } else { absolute };
        if success {
            if global.verbose {
                eprintln!("'{}' is {} {platform} path", self.path, describe(absolute));
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Assertion failed: '{}' is {} {platform} path",
                self.path,
                describe(absolute)
            )))
        }
    }
}

fn describe(absolute: bool) -> &'static str {
    if absolute {
        "an absolute"
    } else {
        "a relative"
    }
}
