#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A library for manipulating filesystem-style paths as strings.
//!
//! The engine joins, normalizes, resolves, diffs and parses paths under
//! either POSIX or Windows rules without touching the filesystem. The
//! current directory and the platform are injected through a
//! [`ResolutionContext`], so results are deterministic and testable.
//!
//! ## Core Types
//!
//! - [`Platform`]: separator, delimiter and absolute-path rules
//! - [`ResolutionContext`]: the directory relative paths resolve against
//! - [`ParsedPath`] and [`Parsed`]: structural decomposition of a path
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::{path, ParseMode, ResolutionContext};
//!
//! let ctx = ResolutionContext::posix("/home/user").unwrap();
//!
//! assert_eq!(path::resolve(&["docs", "../notes.md"], &ctx).unwrap(), "/home/user/notes.md");
//! assert_eq!(path::normalize("foo/can/../bar", &ctx).unwrap(), "foo/bar");
//!
//! let parsed = path::parse("/var/log/syslog.1", ParseMode::Object, ctx.platform()).unwrap();
//! assert_eq!(parsed.get("extension"), Some("1"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod text;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{
    CurrentDirectoryProvider, FixedCurrentDirectory, ParseMode, Parsed, ParsedPath, PathParts,
    Platform, ProcessCurrentDirectory, ResolutionContext,
};
pub use text::CaseStyle;
