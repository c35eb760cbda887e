//! Path normalization and joining.
//!
//! This module provides the string-level building blocks of the engine:
//! - Unifying `\` and `/` runs into the platform separator
//! - Resolving `.` and `..` segments without touching the filesystem
//! - Joining fragments with collapsed separators

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::context::ResolutionContext;
use crate::path::parse::dirname;
use crate::path::platform::Platform;

/// Borrow `path` as UTF-8, failing with an argument error otherwise.
pub(crate) fn to_utf8<'a>(path: &'a Path, argument: &str) -> Result<&'a str> {
    path.to_str()
        .ok_or_else(|| Error::argument(argument, "path contains invalid UTF-8"))
}

/// Replace every run of `\` or `/` with a single `separator`.
fn unify_separators(path: &str, separator: char) -> String {
    let mut unified = String::with_capacity(path.len());
    let mut previous_was_separator = false;

    for c in path.chars() {
        if c == '/' || c == '\\' {
            if !previous_was_separator {
                unified.push(separator);
            }
            previous_was_separator = true;
        } else {
            unified.push(c);
            previous_was_separator = false;
        }
    }

    unified
}

/// Collapse runs of `separator` only, leaving other characters untouched.
fn collapse_separator(path: &str, separator: char) -> String {
    let mut collapsed = String::with_capacity(path.len());
    for c in path.chars() {
        if c == separator && collapsed.ends_with(separator) {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Resolve `.` and `..` segments and unify separators.
///
/// This is the context-free half of [`normalize`]: it never consults a
/// current directory. A `..` with nothing left to remove is discarded, so
/// absolute paths clamp at their root.
///
/// # Examples
///
/// ```
/// use pathkit::path::{clean, Platform};
///
/// assert_eq!(clean("foo/can/../bar", Platform::Posix), "foo/bar");
/// assert_eq!(clean("/foo/bar//baz/asdf/quux/..", Platform::Posix), "/foo/bar/baz/asdf");
/// assert_eq!(clean("/../etc", Platform::Posix), "/etc");
/// assert_eq!(clean("C:/Users\\\\me/./docs", Platform::Windows), "C:\\Users\\me\\docs");
/// ```
#[must_use]
pub fn clean(path: &str, platform: Platform) -> String {
    let separator = platform.separator();
    let unified = unify_separators(path, separator);
    let (root, rest) = platform.split_root(&unified);

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    log::debug!("'..' in {path} ascends past its start; clamping");
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut cleaned = String::with_capacity(unified.len());
    cleaned.push_str(root);
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            cleaned.push(separator);
        }
        cleaned.push_str(segment);
    }
    cleaned
}

/// Normalize a path against a resolution context.
///
/// The inputs `.`, `./`, `..` and `../` (after trimming whitespace and
/// unifying separators) resolve to the current directory and its parent.
/// Everything else goes through [`clean`].
///
/// # Errors
///
/// Returns an argument error if `path` is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::path::{normalize, ResolutionContext};
///
/// let ctx = ResolutionContext::posix("/home/user").unwrap();
///
/// assert_eq!(normalize("foo/can/../bar", &ctx).unwrap(), "foo/bar");
/// assert_eq!(normalize(".", &ctx).unwrap(), "/home/user");
/// assert_eq!(normalize("../", &ctx).unwrap(), "/home");
/// ```
pub fn normalize(path: impl AsRef<Path>, ctx: &ResolutionContext) -> Result<String> {
    let path = to_utf8(path.as_ref(), "path")?;
    let platform = ctx.platform();

    if let Some(directory) = special_directory(path, ctx) {
        return Ok(directory);
    }

    // A cleaned result such as " .." must not turn into a special input
    // on the next pass.
    let cleaned = clean(path, platform);
    Ok(special_directory(&cleaned, ctx).unwrap_or(cleaned))
}

/// Map `.` and `..` (trimmed, with at most one trailing separator) to the
/// cleaned current directory and its parent.
fn special_directory(path: &str, ctx: &ResolutionContext) -> Option<String> {
    let platform = ctx.platform();
    let separator = platform.separator();
    let unified = unify_separators(path.trim(), separator);

    match unified.strip_suffix(separator).unwrap_or(unified.as_str()) {
        ".." => Some(dirname(ctx.current_directory(), platform)),
        "." => Some(clean(ctx.current_directory(), platform)),
        _ => None,
    }
}

/// Join path fragments with the platform separator.
///
/// Repeated separators are collapsed and one trailing separator is removed
/// unless the result is a root. Empty fragments contribute nothing; zero
/// fragments produce an empty string.
///
/// # Errors
///
/// Returns an argument error naming the first fragment that is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::path::{join, Platform};
///
/// assert_eq!(join(&["foo", "bar"], Platform::Posix).unwrap(), "foo/bar");
/// assert_eq!(join(&["/foo/", "/bar/"], Platform::Posix).unwrap(), "/foo/bar");
/// assert_eq!(join(&["/", ""], Platform::Posix).unwrap(), "/");
/// assert_eq!(join(&["C:\\", "tmp"], Platform::Windows).unwrap(), "C:\\tmp");
///
/// let none: [&str; 0] = [];
/// assert_eq!(join(&none, Platform::Posix).unwrap(), "");
/// ```
pub fn join<P: AsRef<Path>>(fragments: &[P], platform: Platform) -> Result<String> {
    let separator = platform.separator();
    let mut joined = String::new();

    for (index, fragment) in fragments.iter().enumerate() {
        let fragment = to_utf8(fragment.as_ref(), &format!("fragment[{index}]"))?;
        if fragment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(separator);
        }
        joined.push_str(fragment);
    }

    let mut collapsed = collapse_separator(&joined, separator);
    if collapsed.len() > platform.root_len(&collapsed) && collapsed.ends_with(separator) {
        collapsed.pop();
    }
    Ok(collapsed)
}
