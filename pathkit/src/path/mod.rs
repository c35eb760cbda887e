//! Pure path manipulation.
//!
//! This module implements joining, normalization, resolution, relative
//! diffing and structural parsing of filesystem-style paths. It never
//! touches the filesystem: every operation is a function of its string
//! arguments plus two injected values.
//!
//! # Key Concepts
//!
//! ## Platform
//!
//! A [`Platform`] selects the separator and the absolute-path rule. It is
//! always passed explicitly, so Windows semantics can be exercised on a
//! POSIX host and vice versa.
//!
//! ## Resolution context
//!
//! Operations that need a base directory (`normalize`, `resolve`,
//! `relative`) take a [`ResolutionContext`], which carries the current
//! directory and the platform. The process working directory is only read
//! through a [`CurrentDirectoryProvider`] when the caller builds a context.
//!
//! ## Parent segments past the root
//!
//! A `..` with nothing left to remove is discarded: `/..` is `/`, and
//! `../foo` cleans to `foo`.
//!
//! # Examples
//!
//! ```
//! use pathkit::path::{normalize, relative, resolve, ResolutionContext};
//!
//! let ctx = ResolutionContext::posix("/home/user").unwrap();
//!
//! assert_eq!(normalize("/foo/bar//baz/asdf/quux/..", &ctx).unwrap(), "/foo/bar/baz/asdf");
//! assert_eq!(resolve(&["/foo/bar", "./baz"], &ctx).unwrap(), "/foo/bar/baz");
//! assert_eq!(
//!     relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb", &ctx).unwrap(),
//!     "../../impl/bbb"
//! );
//! ```
//!
//! Building a context from the process working directory:
//!
//! ```no_run
//! use pathkit::path::{resolve, Platform, ProcessCurrentDirectory, ResolutionContext};
//!
//! let ctx = ResolutionContext::from_provider(&ProcessCurrentDirectory, Platform::native()).unwrap();
//! let absolute = resolve(&["src", "lib.rs"], &ctx).unwrap();
//! ```

pub mod context;
pub mod convert;
pub mod normalize;
pub mod parse;
pub mod platform;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export the engine surface
pub use context::{
    CurrentDirectoryProvider, FixedCurrentDirectory, ProcessCurrentDirectory, ResolutionContext,
};
pub use convert::{delimiter, is_absolute, sep, to_posix, to_windows};
pub use normalize::{clean, join, normalize};
pub use parse::{basename, dirname, extension, format, parse, ParseMode, Parsed, ParsedPath, PathParts};
pub use platform::Platform;
pub use resolver::{relative, resolve};
