//! Output formatting module for parsed paths.
//!
//! This module renders the result of [`crate::path::parse`] as JSON, YAML or
//! plain `key=value` lines.

mod formatters;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::path::Parsed;
use crate::Result;

pub use formatters::{JsonFormatter, PlainFormatter, YamlFormatter};

/// Trait for formatting parsed paths into different output formats.
pub trait OutputFormatter {
    /// Format the given parsed path into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, parsed: &Parsed) -> Result<String>;
}

/// Available output formats for parsed paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// YAML mapping.
    Yaml,
    /// One `key=value` line per part.
    Plain,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Plain => Box::new(PlainFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Plain => write!(f, "plain"),
        }
    }
}
