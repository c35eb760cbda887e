//! Absolute resolution and relative diffing of paths.
//!
//! [`resolve`] turns a sequence of fragments into one absolute path, reading
//! right to left until an absolute fragment is found. [`relative`] computes
//! the path leading from one location to another.

use std::path::Path;

use crate::error::Result;
use crate::path::context::ResolutionContext;
use crate::path::normalize::{join, normalize, to_utf8};

/// Resolve fragments into an absolute, normalized path.
///
/// Fragments are processed from last to first; processing stops at the
/// first absolute fragment. If none is absolute, the result is anchored at
/// the context's current directory. With zero fragments the current
/// directory is returned exactly as supplied.
///
/// # Errors
///
/// Returns an argument error naming the first fragment that is not valid
/// UTF-8. Every fragment is checked, including those left of an absolute
/// fragment.
///
/// # Examples
///
/// ```
/// use pathkit::path::{resolve, ResolutionContext};
///
/// let ctx = ResolutionContext::posix("/home/user").unwrap();
///
/// assert_eq!(resolve(&["/foo/bar", "./baz"], &ctx).unwrap(), "/foo/bar/baz");
/// assert_eq!(resolve(&["/foo/bar", "/tmp/file/"], &ctx).unwrap(), "/tmp/file");
/// assert_eq!(resolve(&["docs", "../src"], &ctx).unwrap(), "/home/user/src");
/// ```
pub fn resolve<P: AsRef<Path>>(fragments: &[P], ctx: &ResolutionContext) -> Result<String> {
    if fragments.is_empty() {
        return Ok(ctx.current_directory().to_string());
    }

    let fragments = fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| to_utf8(fragment.as_ref(), &format!("fragment[{index}]")))
        .collect::<Result<Vec<&str>>>()?;

    let platform = ctx.platform();
    let mut accumulated = String::new();

    for fragment in fragments.iter().rev() {
        accumulated = join(&[*fragment, accumulated.as_str()], platform)?;
        if platform.is_absolute(fragment) {
            return normalize(&accumulated, ctx);
        }
    }

    let normalized = normalize(&accumulated, ctx)?;
    if platform.is_absolute(&normalized) {
        return Ok(normalized);
    }

    let anchored = join(&[ctx.current_directory(), accumulated.as_str()], platform)?;
    normalize(&anchored, ctx)
}

/// Compute the relative path from `from` to `to`.
///
/// Both paths are resolved first. The result climbs out of `from` with
/// `..` segments down to the longest shared prefix, then descends into the
/// rest of `to`. Identical locations yield an empty string.
///
/// On Windows, paths on different drives share no prefix; the resolved `to`
/// is returned as-is.
///
/// # Errors
///
/// Returns an argument error if either path is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use pathkit::path::{relative, ResolutionContext};
///
/// let ctx = ResolutionContext::posix("/home/user").unwrap();
///
/// assert_eq!(
///     relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb", &ctx).unwrap(),
///     "../../impl/bbb"
/// );
/// assert_eq!(relative("foo/bar", "foo/bar/baz", &ctx).unwrap(), "baz");
/// assert_eq!(relative("foo/bar", "foo/bar", &ctx).unwrap(), "");
/// ```
pub fn relative(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    ctx: &ResolutionContext,
) -> Result<String> {
    let from = to_utf8(from.as_ref(), "from")?;
    let to = to_utf8(to.as_ref(), "to")?;

    let from = resolve(&[from], ctx)?;
    let to = resolve(&[to], ctx)?;
    if from == to {
        return Ok(String::new());
    }

    let platform = ctx.platform();
    let separator = platform.separator();
    let (from_root, from_rest) = platform.split_root(&from);
    let (to_root, to_rest) = platform.split_root(&to);
    if !from_root.eq_ignore_ascii_case(to_root) {
        return Ok(to);
    }

    let from_segments: Vec<&str> = from_rest.split(separator).filter(|s| !s.is_empty()).collect();
    let to_segments: Vec<&str> = to_rest.split(separator).filter(|s| !s.is_empty()).collect();

    let common = from_segments
        .iter()
        .zip(&to_segments)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; from_segments.len() - common];
    parts.extend_from_slice(&to_segments[common..]);
    Ok(parts.join(separator.to_string().as_str()))
}
