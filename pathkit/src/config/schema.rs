//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathkit: the
//! platform whose rules the engine applies, the directory relative paths
//! resolve against, and the presentation defaults used by the CLI.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LogLevel;
use crate::output::OutputFormat;
use crate::path::{CurrentDirectoryProvider, Platform, ResolutionContext};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the accessors' defaults.
///
/// # Examples
///
/// ```
/// use pathkit::config::Config;
/// use pathkit::path::Platform;
///
/// let config: Config = serde_yaml::from_str("platform: windows\ncwd: 'C:\\work'\n").unwrap();
/// assert_eq!(config.effective_platform(), Platform::Windows);
/// assert_eq!(config.cwd.as_deref(), Some("C:\\work"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path rules to apply (`posix` or `windows`).
    pub platform: Option<Platform>,

    /// Directory that relative paths resolve against.
    ///
    /// Must be absolute under the effective platform. When unset, the
    /// process working directory is used.
    pub cwd: Option<String>,

    /// Default verbosity for diagnostics.
    pub log_mode: Option<LogLevel>,

    /// Default rendering of `parse` results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The platform to use, defaulting to the host's.
    #[must_use]
    pub fn effective_platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }

    /// The output format to use, defaulting to JSON.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Build the resolution context for path operations.
    ///
    /// A configured `cwd` wins; otherwise `provider` supplies the current
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not absolute under the effective
    /// platform, or if the provider fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::config::Config;
    /// use pathkit::path::{FixedCurrentDirectory, Platform};
    ///
    /// let config = Config {
    ///     platform: Some(Platform::Posix),
    ///     cwd: Some("/srv".to_string()),
    ///     ..Default::default()
    /// };
    /// let ctx = config
    ///     .resolution_context(&FixedCurrentDirectory::new("/ignored"))
    ///     .unwrap();
    /// assert_eq!(ctx.current_directory(), "/srv");
    /// ```
    pub fn resolution_context(
        &self,
        provider: &dyn CurrentDirectoryProvider,
    ) -> Result<ResolutionContext> {
        let platform = self.effective_platform();
        match &self.cwd {
            Some(cwd) => ResolutionContext::new(cwd.clone(), platform),
            None => ResolutionContext::from_provider(provider, platform),
        }
    }
}
