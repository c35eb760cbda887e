//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on resolution, relative diffing and parse/format.

use super::normalize::{clean, normalize};
use super::parse::{format, parse, ParseMode};
use super::platform::Platform;
use super::resolver::{relative, resolve};
use super::ResolutionContext;
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}(\\.[a-z]{1,4})?"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            path_component_strategy(),
        ],
        0..5,
    )
    .prop_flat_map(|parts| (prop::bool::weighted(0.2), Just(parts)))
    .prop_map(|(absolute, parts)| {
        let body = parts.join("/");
        if absolute {
            format!("/{body}")
        } else {
            body
        }
    })
}

// Context directories are absolute but not necessarily clean: doubled
// separators, `.` segments and a trailing separator all occur.
fn context_strategy() -> impl Strategy<Value = ResolutionContext> {
    (
        prop::collection::vec(
            prop_oneof![
                Just(String::new()),
                Just(".".to_string()),
                path_component_strategy(),
            ],
            0..6,
        ),
        prop::bool::ANY,
    )
        .prop_map(|(parts, trailing)| {
            let mut cwd = format!("/{}", parts.join("/"));
            if trailing {
                cwd.push('/');
            }
            ResolutionContext::posix(cwd).expect("cwd starts with a separator")
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // resolve() output is always absolute and normalized
    #[test]
    fn resolve_is_absolute_and_normalized(
        ctx in context_strategy(),
        fragments in prop::collection::vec(fragment_strategy(), 1..4),
    ) {
        let resolved = resolve(&fragments, &ctx).unwrap();
        prop_assert!(Platform::Posix.is_absolute(&resolved));
        prop_assert!(!resolved.contains("//"));
        prop_assert!(resolved == "/" || !resolved.ends_with('/'));
        prop_assert_eq!(normalize(&resolved, &ctx).unwrap(), resolved);
    }

    // relative(p, p) is always empty
    #[test]
    fn relative_to_self_is_empty(ctx in context_strategy(), p in fragment_strategy()) {
        prop_assert_eq!(relative(&p, &p, &ctx).unwrap(), "");
    }

    // resolve(a, relative(a, b)) == b for normalized absolute a and b
    #[test]
    fn relative_round_trips_through_resolve(
        ctx in context_strategy(),
        a in absolute_path_strategy(),
        b in absolute_path_strategy(),
    ) {
        let a = clean(&a, Platform::Posix);
        let b = clean(&b, Platform::Posix);
        let rel = relative(&a, &b, &ctx).unwrap();
        prop_assert_eq!(resolve(&[a.as_str(), rel.as_str()], &ctx).unwrap(), b);
    }

    // format(parse(p)) == normalize(p) whenever p has a dirname and basename
    #[test]
    fn parse_format_round_trip(
        dir in absolute_path_strategy(),
        base in path_component_strategy(),
    ) {
        let ctx = ResolutionContext::posix("/").unwrap();
        let path = format!("{dir}/{base}");
        let parsed = parse(&path, ParseMode::Object, Platform::Posix).unwrap();
        prop_assert_eq!(format(&parsed, Platform::Posix).unwrap(), normalize(&path, &ctx).unwrap());
    }

    // Relative paths round-trip too, including bare names whose dirname is "."
    #[test]
    fn parse_format_round_trip_relative(
        dirs in prop::collection::vec(path_component_strategy(), 0..4),
        base in path_component_strategy(),
    ) {
        let ctx = ResolutionContext::posix("/").unwrap();
        let path = dirs.iter().chain(std::iter::once(&base)).cloned().collect::<Vec<_>>().join("/");
        let parsed = parse(&path, ParseMode::Object, Platform::Posix).unwrap();
        prop_assert_eq!(format(&parsed, Platform::Posix).unwrap(), normalize(&path, &ctx).unwrap());
    }
}
