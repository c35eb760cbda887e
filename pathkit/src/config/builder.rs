//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder that layers configuration sources and validates the result.
///
/// Precedence, lowest to highest: built-in defaults, the user config file,
/// an explicit config file, `PATHKIT_*` environment variables, then any
/// programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder};
/// use pathkit::path::Platform;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         platform: Some(Platform::Posix),
///         cwd: Some("/srv".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cwd.as_deref(), Some("/srv"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PATHKIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer an explicit configuration file above the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Layer a programmatic configuration above every other source.
    ///
    /// Later calls take priority over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigMerger::merge(ConfigLoader::load_all(self.config_file.as_deref())?)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{CWD_ENV, PLATFORM_ENV};
    use crate::path::Platform;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_programmatic_overrides_stack() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                platform: Some(Platform::Posix),
                cwd: Some("/first".to_string()),
                ..Default::default()
            })
            .with_config(Config {
                cwd: Some("/second".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.platform, Some(Platform::Posix));
        assert_eq!(config.cwd.as_deref(), Some("/second"));
    }

    #[test]
    fn test_build_validates() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                platform: Some(Platform::Posix),
                cwd: Some("not/absolute".to_string()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("pathkit.yaml");
        fs::write(&file, "platform: posix\ncwd: /from/file\n").unwrap();

        let saved_cwd = env::var(CWD_ENV).ok();
        let saved_platform = env::var(PLATFORM_ENV).ok();
        env::remove_var(PLATFORM_ENV);
        env::set_var(CWD_ENV, "/from/env");

        let config = ConfigBuilder::new().with_config_file(&file).build();

        match saved_cwd {
            Some(v) => env::set_var(CWD_ENV, v),
            None => env::remove_var(CWD_ENV),
        }
        if let Some(v) = saved_platform {
            env::set_var(PLATFORM_ENV, v);
        }

        let config = config.unwrap();
        assert_eq!(config.platform, Some(Platform::Posix));
        assert_eq!(config.cwd.as_deref(), Some("/from/env"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .skip_env()
            .with_config_file(temp_dir.path().join("absent.yaml"))
            .build();
        assert!(result.is_err());
    }
}
