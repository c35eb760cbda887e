//! Command to change the casing of an identifier.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::text::is_blank;
use pathkit::CaseStyle;

/// Convert TEXT to another casing style.
#[derive(Args)]
pub struct CaseCommand {
    /// Text to convert
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Target style
    #[arg(long, value_enum)]
    pub style: CaseStyle,
}

impl CaseCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if is_blank(&self.text) {
            return Err(CliError::InvalidArguments("TEXT cannot be blank".into()));
        }
        println!("{}", self.style.convert(&self.text));
        Ok(())
    }
}
