//! Structural parsing and formatting of paths.
//!
//! [`parse`] splits a cleaned path into directory, base name, file name and
//! extension; [`format`] is its inverse.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize::{clean, join, to_utf8};
use crate::path::platform::Platform;

/// The parts of a path.
///
/// `base` is `filename`, plus `"."` and `extension` when the extension is
/// non-empty. The extension is stored without its leading dot.
///
/// # Examples
///
/// ```
/// use pathkit::path::{parse, ParseMode, Platform};
///
/// let parsed = parse("/my/name/is/kang.jpg", ParseMode::Object, Platform::Posix)
///     .unwrap()
///     .into_object();
/// assert_eq!(parsed.dir, "/my/name/is");
/// assert_eq!(parsed.base, "kang.jpg");
/// assert_eq!(parsed.filename, "kang");
/// assert_eq!(parsed.extension, "jpg");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedPath {
    /// Everything before the last separator, the root, or `"."`.
    pub dir: String,
    /// Everything after the last separator.
    pub base: String,
    /// The base name without its extension.
    pub filename: String,
    /// The extension without its leading dot, or empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extension: String,
}

impl ParsedPath {
    /// Convert into a key/value mapping.
    ///
    /// The `extension` key is only present when the extension is non-empty.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("dir".to_string(), self.dir);
        map.insert("base".to_string(), self.base);
        map.insert("filename".to_string(), self.filename);
        if !self.extension.is_empty() {
            map.insert("extension".to_string(), self.extension);
        }
        map
    }
}

/// Shape of the value returned by [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// A [`ParsedPath`] record.
    #[default]
    Object,
    /// A plain key/value mapping.
    Assoc,
}

/// Result of [`parse`]: a record or a mapping, depending on [`ParseMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parsed {
    /// Structured record.
    Object(ParsedPath),
    /// Key/value mapping.
    Assoc(BTreeMap<String, String>),
}

impl Parsed {
    /// Look up a part by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.part(key)
    }

    /// Convert into a [`ParsedPath`] regardless of shape.
    #[must_use]
    pub fn into_object(self) -> ParsedPath {
        match self {
            Self::Object(parsed) => parsed,
            Self::Assoc(mut map) => ParsedPath {
                dir: map.remove("dir").unwrap_or_default(),
                base: map.remove("base").unwrap_or_default(),
                filename: map.remove("filename").unwrap_or_default(),
                extension: map.remove("extension").unwrap_or_default(),
            },
        }
    }
}

/// Named access to path parts, as accepted by [`format`].
///
/// Implemented for [`ParsedPath`], [`Parsed`] and string maps.
pub trait PathParts {
    /// Return the part called `key`, if present.
    fn part(&self, key: &str) -> Option<&str>;
}

impl PathParts for ParsedPath {
    fn part(&self, key: &str) -> Option<&str> {
        match key {
            "dir" => Some(&self.dir),
            "base" => Some(&self.base),
            "filename" => Some(&self.filename),
            "extension" => Some(&self.extension),
            _ => None,
        }
    }
}

impl PathParts for Parsed {
    fn part(&self, key: &str) -> Option<&str> {
        match self {
            Self::Object(parsed) => parsed.part(key),
            Self::Assoc(map) => map.part(key),
        }
    }
}

impl PathParts for BTreeMap<String, String> {
    fn part(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> PathParts for HashMap<String, String, S> {
    fn part(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Split a path into its parts.
///
/// The path is cleaned first. With no separator, `dir` is `"."`. A dot at
/// position 0 of the base name does not start an extension.
///
/// # Errors
///
/// Returns an argument error if `path` is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::path::{parse, ParseMode, Platform};
///
/// let parsed = parse("foo/bar", ParseMode::Assoc, Platform::Posix).unwrap();
/// assert_eq!(parsed.get("dir"), Some("foo"));
/// assert_eq!(parsed.get("base"), Some("bar"));
/// assert_eq!(parsed.get("extension"), None);
/// ```
pub fn parse(path: impl AsRef<Path>, mode: ParseMode, platform: Platform) -> Result<Parsed> {
    let path = to_utf8(path.as_ref(), "path")?;
    let parsed = split(path, platform);
    Ok(match mode {
        ParseMode::Object => Parsed::Object(parsed),
        ParseMode::Assoc => Parsed::Assoc(parsed.into_map()),
    })
}

fn split(path: &str, platform: Platform) -> ParsedPath {
    let cleaned = clean(path, platform);
    let root_len = platform.root_len(&cleaned);

    let (dir, base) = match cleaned.rfind(platform.separator()) {
        Some(index) if index < root_len => (&cleaned[..root_len], &cleaned[root_len..]),
        Some(index) => (&cleaned[..index], &cleaned[index + 1..]),
        None => (".", cleaned.as_str()),
    };

    let (filename, extension) = match base.rfind('.') {
        Some(dot) if dot > 0 => (&base[..dot], &base[dot + 1..]),
        _ => (base, ""),
    };

    ParsedPath {
        dir: dir.to_string(),
        base: base.to_string(),
        filename: filename.to_string(),
        extension: extension.to_string(),
    }
}

/// Build a path from its parts.
///
/// Requires `dir` (or `dirname`) and `base` (or `basename`). When the base
/// name is absent, `filename` plus an optional `extension` stands in for it.
/// A `dir` of `.` contributes nothing, so bare file names round-trip through
/// [`parse`].
///
/// # Errors
///
/// Returns an argument error naming the missing field.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use pathkit::path::{format, Platform};
///
/// let mut parts = BTreeMap::new();
/// parts.insert("dir".to_string(), "foo".to_string());
/// parts.insert("base".to_string(), "bar".to_string());
/// assert_eq!(format(&parts, Platform::Posix).unwrap(), "foo/bar");
///
/// parts.remove("base");
/// assert!(format(&parts, Platform::Posix).is_err());
/// ```
pub fn format<P: PathParts + ?Sized>(parts: &P, platform: Platform) -> Result<String> {
    let dir = first_present(parts, &["dir", "dirname"])
        .ok_or_else(|| Error::argument("dir", "missing required field 'dir'"))?;

    let base = match first_present(parts, &["base", "basename"]) {
        Some(base) => base.to_string(),
        None => {
            let filename = first_present(parts, &["filename"]).ok_or_else(|| {
                Error::argument("base", "missing required field 'base' (or 'filename')")
            })?;
            match first_present(parts, &["extension"]) {
                Some(extension) => {
                    format!("{filename}.{}", extension.trim_start_matches('.'))
                }
                None => filename.to_string(),
            }
        }
    };

    if dir == "." {
        return join(&[base.as_str()], platform);
    }
    join(&[dir, base.as_str()], platform)
}

fn first_present<'a, P: PathParts + ?Sized>(parts: &'a P, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| parts.part(key).filter(|value| !value.is_empty()))
}

/// The last segment of a cleaned path.
///
/// # Examples
///
/// ```
/// use pathkit::path::{basename, Platform};
///
/// assert_eq!(basename("foo/bar", Platform::Posix), "bar");
/// assert_eq!(basename("/tmp/file/", Platform::Posix), "file");
/// ```
#[must_use]
pub fn basename(path: &str, platform: Platform) -> String {
    split(path, platform).base
}

/// Everything before the last segment of a cleaned path.
///
/// Returns the root for top-level entries and `"."` when there is no
/// separator.
///
/// # Examples
///
/// ```
/// use pathkit::path::{dirname, Platform};
///
/// assert_eq!(dirname("foo/bar", Platform::Posix), "foo");
/// assert_eq!(dirname("/foo", Platform::Posix), "/");
/// assert_eq!(dirname("bar", Platform::Posix), ".");
/// ```
#[must_use]
pub fn dirname(path: &str, platform: Platform) -> String {
    split(path, platform).dir
}

/// The extension of the last segment, without its dot.
///
/// # Examples
///
/// ```
/// use pathkit::path::{extension, Platform};
///
/// assert_eq!(extension("foo/bar.php", Platform::Posix), "php");
/// assert_eq!(extension(".bashrc", Platform::Posix), "");
/// ```
#[must_use]
pub fn extension(path: &str, platform: Platform) -> String {
    split(path, platform).extension
}
