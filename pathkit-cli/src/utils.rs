//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, logger selection and building the resolution
//! context the path commands run against.

use crate::error::CliError;
use pathkit::{
    init_logger, Config, ConfigBuilder, Logger, Platform, ProcessCurrentDirectory,
    ResolutionContext,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path rules to apply, overriding configuration.
    pub platform: Option<Platform>,

    /// Directory relative paths resolve against, overriding configuration.
    pub cwd: Option<String>,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config file
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config_file {
        builder = builder.with_config_file(path);
    }

    builder
        .with_config(Config {
            platform: global.platform,
            cwd: global.cwd.clone(),
            ..Default::default()
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the resolution context from configuration and the process directory.
pub fn resolution_context(config: &Config) -> Result<ResolutionContext, CliError> {
    config
        .resolution_context(&ProcessCurrentDirectory)
        .map_err(CliError::from)
}

/// Load configuration and build the resolution context in one step.
pub fn load_context(global: &GlobalOptions) -> Result<(Config, ResolutionContext), CliError> {
    let config = load_configuration(global)?;
    let ctx = resolution_context(&config)?;
    Ok((config, ctx))
}

/// Pick the logger for this invocation.
///
/// `--verbose`/`--quiet` win; otherwise the configured `log_mode` applies.
/// A configuration that fails to load is ignored here and reported by the
/// command that needs it.
pub fn select_logger(global: &GlobalOptions) -> Logger {
    if global.verbose || global.quiet {
        return init_logger(global.verbose, global.quiet);
    }
    match load_configuration(global) {
        Ok(Config {
            log_mode: Some(level),
            ..
        }) => Logger::new(level),
        _ => init_logger(false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_logger_flags_win() {
        let global = GlobalOptions {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(select_logger(&global).level(), pathkit::LogLevel::Verbose);

        let global = GlobalOptions {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(select_logger(&global).level(), pathkit::LogLevel::Quiet);
    }

    #[test]
    fn test_load_configuration_rejects_relative_cwd() {
        let global = GlobalOptions {
            platform: Some(Platform::Posix),
            cwd: Some("relative".to_string()),
            ..Default::default()
        };
        let err = load_configuration(&global).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_load_context_uses_global_cwd() {
        let global = GlobalOptions {
            platform: Some(Platform::Posix),
            cwd: Some("/work/tree".to_string()),
            ..Default::default()
        };
        let (config, ctx) = load_context(&global).unwrap();
        assert_eq!(config.effective_platform(), Platform::Posix);
        assert_eq!(ctx.current_directory(), "/work/tree");
    }
}
