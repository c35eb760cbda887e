//! Configuration system for pathkit.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_*`)
//! 3. Explicit config file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathkit/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use pathkit::config::ConfigBuilder;
//! use pathkit::path::ProcessCurrentDirectory;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let ctx = config.resolution_context(&ProcessCurrentDirectory).unwrap();
//! println!("resolving against {}", ctx.current_directory());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathkit::config::{Config, ConfigBuilder};
//! use pathkit::path::Platform;
//!
//! let custom = Config {
//!     platform: Some(Platform::Windows),
//!     cwd: Some("C:\\projects".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.effective_platform(), Platform::Windows);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, CWD_ENV, OUTPUT_FORMAT_ENV, PLATFORM_ENV};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
