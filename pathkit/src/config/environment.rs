//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::output::OutputFormat;
use crate::path::Platform;

/// Selects the platform rules (`posix`, `windows`).
pub const PLATFORM_ENV: &str = "PATHKIT_PLATFORM";

/// Overrides the directory relative paths resolve against.
pub const CWD_ENV: &str = "PATHKIT_CWD";

/// Selects the default `parse` output format (`json`, `yaml`, `plain`).
pub const OUTPUT_FORMAT_ENV: &str = "PATHKIT_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(PLATFORM_ENV) {
            config.platform = Some(Platform::parse(&value).map_err(|_| Error::Validation {
                field: PLATFORM_ENV.into(),
                message: format!("Invalid platform: '{value}' (expected posix or windows)"),
            })?);
        }

        if let Some(value) = Self::var(CWD_ENV) {
            config.cwd = Some(value);
        }

        if let Some(value) = Self::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&value).map_err(|message| {
                Error::Validation {
                    field: LOG_MODE_ENV.into(),
                    message,
                }
            })?);
        }

        if let Some(value) = Self::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(Self::parse_output_format(&value)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{s}' (expected json/yaml/plain)"),
            }),
        }
    }
}
