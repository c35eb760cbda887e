//! Platform policy for path handling.
//!
//! A [`Platform`] decides which character separates segments and which
//! strings count as absolute. It is always selected explicitly by the
//! caller, so both POSIX and Windows behavior can be exercised on any host.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The pair of separator character and absolute-path rule in effect.
///
/// # Examples
///
/// ```
/// use pathkit::path::Platform;
///
/// assert_eq!(Platform::Posix.separator(), '/');
/// assert_eq!(Platform::Windows.separator(), '\\');
///
/// assert!(Platform::Posix.is_absolute("/usr/lib"));
/// assert!(!Platform::Posix.is_absolute("C:\\Windows"));
/// assert!(Platform::Windows.is_absolute("C:\\Windows"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Forward-slash separated paths rooted at `/`.
    Posix,
    /// Backslash separated paths rooted at `\` or a drive such as `C:\`.
    Windows,
}

impl Platform {
    /// The platform this crate was compiled for.
    ///
    /// This is a compile-time choice, never a runtime probe.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Segment separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Delimiter between entries of a `PATH`-style list.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::path::Platform;
    ///
    /// assert_eq!(Platform::Posix.delimiter(), ':');
    /// assert_eq!(Platform::Windows.delimiter(), ';');
    /// ```
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }

    /// Check whether `path` is absolute under this platform.
    ///
    /// POSIX paths are absolute when they start with `/`. Windows paths are
    /// absolute when they start with a separator or with a drive letter
    /// followed by a separator (`C:\`, `d:/`).
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        match self {
            Self::Posix => path.starts_with('/'),
            Self::Windows => path.starts_with(['\\', '/']) || has_drive_root(path),
        }
    }

    /// Byte length of the root prefix of `path`, or 0 for relative paths.
    ///
    /// The root is a single leading separator, or on Windows a drive letter,
    /// colon and separator.
    pub(crate) fn root_len(self, path: &str) -> usize {
        match self {
            Self::Posix if path.starts_with('/') => 1,
            Self::Windows if path.starts_with(['\\', '/']) => 1,
            Self::Windows if has_drive_root(path) => 3,
            _ => 0,
        }
    }

    /// Split `path` into its root prefix and the remainder.
    pub(crate) fn split_root(self, path: &str) -> (&str, &str) {
        path.split_at(self.root_len(path))
    }

    /// Parse a platform name.
    ///
    /// Recognizes `posix`, `unix`, `windows` and `win32` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for any other name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::path::Platform;
    ///
    /// assert_eq!(Platform::parse("POSIX").unwrap(), Platform::Posix);
    /// assert_eq!(Platform::parse("win32").unwrap(), Platform::Windows);
    /// assert!(Platform::parse("plan9").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(Error::Validation {
                field: "platform".into(),
                message: format!("unknown platform '{s}' (expected posix or windows)"),
            }),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn has_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && matches!(bytes[2], b'\\' | b'/')
}
