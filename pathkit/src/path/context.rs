//! Resolution context and current-directory providers.
//!
//! The engine never reads the process working directory itself. Callers
//! build a [`ResolutionContext`] (usually from a [`CurrentDirectoryProvider`])
//! and pass it to every operation that needs a base directory.

use std::env;

use crate::error::{Error, Result};
use crate::path::platform::Platform;

/// Source of the directory that relative paths are resolved against.
#[cfg_attr(test, mockall::automock)]
pub trait CurrentDirectoryProvider {
    /// Return the current directory as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or is not
    /// valid UTF-8.
    fn current_dir(&self) -> Result<String>;
}

/// Provider backed by the process working directory.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::{CurrentDirectoryProvider, ProcessCurrentDirectory};
///
/// let cwd = ProcessCurrentDirectory.current_dir().unwrap();
/// assert!(!cwd.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCurrentDirectory;

impl CurrentDirectoryProvider for ProcessCurrentDirectory {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir()?;
        cwd.into_os_string().into_string().map_err(|raw| {
            Error::argument(
                "current_directory",
                format!("{} contains invalid UTF-8", raw.to_string_lossy()),
            )
        })
    }
}

/// Provider that always returns the same directory.
///
/// # Examples
///
/// ```
/// use pathkit::path::{CurrentDirectoryProvider, FixedCurrentDirectory};
///
/// let provider = FixedCurrentDirectory::new("/srv/app");
/// assert_eq!(provider.current_dir().unwrap(), "/srv/app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCurrentDirectory {
    directory: String,
}

impl FixedCurrentDirectory {
    /// Create a provider returning `directory`.
    #[must_use]
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl CurrentDirectoryProvider for FixedCurrentDirectory {
    fn current_dir(&self) -> Result<String> {
        Ok(self.directory.clone())
    }
}

/// Inputs every context-dependent path operation needs.
///
/// A context is an immutable value: it is passed by reference per call and
/// never cached inside the engine.
///
/// # Examples
///
/// ```
/// use pathkit::path::{Platform, ResolutionContext};
///
/// let ctx = ResolutionContext::new("/home/user", Platform::Posix).unwrap();
/// assert_eq!(ctx.current_directory(), "/home/user");
/// assert_eq!(ctx.platform(), Platform::Posix);
///
/// // The base directory must be absolute for the chosen platform
/// assert!(ResolutionContext::new("relative", Platform::Posix).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionContext {
    current_directory: String,
    platform: Platform,
}

impl ResolutionContext {
    /// Create a context from an explicit directory.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `current_directory` is not absolute
    /// under `platform`.
    pub fn new(current_directory: impl Into<String>, platform: Platform) -> Result<Self> {
        let current_directory = current_directory.into();
        if !platform.is_absolute(&current_directory) {
            return Err(Error::argument(
                "current_directory",
                format!("'{current_directory}' is not an absolute {platform} path"),
            ));
        }
        Ok(Self {
            current_directory,
            platform,
        })
    }

    /// Create a context by asking `provider` for the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails or returns a relative path.
    pub fn from_provider(
        provider: &dyn CurrentDirectoryProvider,
        platform: Platform,
    ) -> Result<Self> {
        let directory = provider.current_dir()?;
        log::debug!("resolution context: cwd={directory} platform={platform}");
        Self::new(directory, platform)
    }

    /// Shorthand for a POSIX context.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `current_directory` does not start with `/`.
    pub fn posix(current_directory: impl Into<String>) -> Result<Self> {
        Self::new(current_directory, Platform::Posix)
    }

    /// Shorthand for a Windows context.
    ///
    /// # Errors
    ///
    /// Returns an argument error if `current_directory` is not absolute.
    pub fn windows(current_directory: impl Into<String>) -> Result<Self> {
        Self::new(current_directory, Platform::Windows)
    }

    /// The directory relative paths are resolved against.
    #[must_use]
    pub fn current_directory(&self) -> &str {
        &self.current_directory
    }

    /// The platform policy in effect.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_requires_absolute_directory() {
        assert!(ResolutionContext::posix("/").is_ok());
        assert!(ResolutionContext::posix("srv").is_err());
        assert!(ResolutionContext::windows("C:\\Users").is_ok());
        assert!(ResolutionContext::windows("Users").is_err());

        let err = ResolutionContext::posix("").unwrap_err();
        assert!(err.is_argument());
    }

    #[test]
    fn test_context_keeps_directory_verbatim() {
        let ctx = ResolutionContext::posix("/srv//app/").unwrap();
        assert_eq!(ctx.current_directory(), "/srv//app/");
    }

    #[test]
    fn test_from_fixed_provider() {
        let provider = FixedCurrentDirectory::new("/data");
        let ctx = ResolutionContext::from_provider(&provider, Platform::Posix).unwrap();
        assert_eq!(ctx.current_directory(), "/data");
    }

    #[test]
    fn test_from_mock_provider() {
        let mut provider = MockCurrentDirectoryProvider::new();
        provider
            .expect_current_dir()
            .times(1)
            .returning(|| Ok("D:\\work".to_string()));

        let ctx = ResolutionContext::from_provider(&provider, Platform::Windows).unwrap();
        assert_eq!(ctx.current_directory(), "D:\\work");
        assert_eq!(ctx.platform(), Platform::Windows);
    }

    #[test]
    fn test_provider_error_propagates() {
        let mut provider = MockCurrentDirectoryProvider::new();
        provider.expect_current_dir().returning(|| {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "cwd removed",
            )))
        });

        let result = ResolutionContext::from_provider(&provider, Platform::Posix);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_provider_relative_directory_rejected() {
        let provider = FixedCurrentDirectory::new("not/absolute");
        let result = ResolutionContext::from_provider(&provider, Platform::Posix);
        assert!(result.unwrap_err().is_argument());
    }

    #[test]
    #[cfg(unix)]
    fn test_process_provider_is_absolute() {
        let cwd = ProcessCurrentDirectory.current_dir().unwrap();
        assert!(Platform::Posix.is_absolute(&cwd));
    }
}
