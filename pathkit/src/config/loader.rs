//! Configuration file discovery and loading.
//!
//! This module handles locating and loading pathkit configuration files
//! with proper precedence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".pathkit";

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.pathkit/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load all configuration files.
    ///
    /// Looks for:
    /// 1. The user config at `~/.pathkit/config.yaml` (precedence 1)
    /// 2. `explicit_file`, if given (precedence 2)
    ///
    /// A missing user config is skipped; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed.
    pub fn load_all(explicit_file: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config()? {
            sources.push(user_config);
        }

        if let Some(path) = explicit_file {
            let config = Self::load_file(path)?;
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file, if one exists.
    ///
    /// A missing home directory is not an error; there is simply no user
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the user configuration file, `~/.pathkit/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
