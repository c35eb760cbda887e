//! Separator conversion and platform queries.

use crate::path::platform::Platform;

/// Check whether `path` is absolute under `platform`.
///
/// # Examples
///
/// ```
/// use pathkit::path::{is_absolute, Platform};
///
/// assert!(is_absolute("/foo/bar", Platform::Posix));
/// assert!(!is_absolute("foo/bar", Platform::Posix));
/// assert!(is_absolute("C:\\foo", Platform::Windows));
/// ```
#[must_use]
pub fn is_absolute(path: &str, platform: Platform) -> bool {
    platform.is_absolute(path)
}

/// The `PATH`-list delimiter for `platform`.
#[must_use]
pub fn delimiter(platform: Platform) -> char {
    platform.delimiter()
}

/// The segment separator of the platform this crate was built for.
#[must_use]
pub fn sep() -> char {
    Platform::native().separator()
}

/// Replace every `/` with `\`.
///
/// # Examples
///
/// ```
/// use pathkit::path::to_windows;
///
/// assert_eq!(to_windows("foo/bar"), "foo\\bar");
/// ```
#[must_use]
pub fn to_windows(path: &str) -> String {
    path.replace('/', "\\")
}

/// Replace every `\` with `/`.
///
/// # Examples
///
/// ```
/// use pathkit::path::to_posix;
///
/// assert_eq!(to_posix("foo\\bar"), "foo/bar");
/// ```
#[must_use]
pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}
