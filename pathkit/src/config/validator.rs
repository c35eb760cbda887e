//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `cwd` is empty or not absolute under
    /// the effective platform.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref cwd) = config.cwd {
            Self::validate_cwd(config, cwd)?;
        }
        Ok(())
    }

    fn validate_cwd(config: &Config, cwd: &str) -> Result<()> {
        if cwd.trim().is_empty() {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: "cwd cannot be empty".into(),
            });
        }

        let platform = config.effective_platform();
        if !platform.is_absolute(cwd) {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: format!("'{cwd}' is not an absolute {platform} path"),
            });
        }

        Ok(())
    }
}
