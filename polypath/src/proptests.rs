//! Property-based tests for both engines.

use crate::context::FixedContext;
use crate::engine::PathEngine;
use crate::posix::PosixEngine;
use crate::windows::WindowsEngine;
use proptest::prelude::*;

fn posix() -> PosixEngine<FixedContext> {
    PosixEngine::with_context(FixedContext::new().with_current_dir("/home/user"))
}

fn win32() -> WindowsEngine<FixedContext> {
    WindowsEngine::with_context(FixedContext::new().with_current_dir("C:\\Users\\user"))
}

// Arbitrary POSIX-ish strings, heavy on separators and dots
fn posix_string_strategy() -> impl Strategy<Value = String> {
    "[a-c./]{0,16}"
}

// ':' included so tails like `x/../c:` collapse into drive designators
fn windows_string_strategy() -> impl Strategy<Value = String> {
    "[a-c:./\\\\]{0,16}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z]{1,6}(\\.[a-z]{0,3})?",
        "\\.[a-z]{1,6}",
    ]
}

// Single-separator paths without trailing separators: the shape that
// parse/format reproduce exactly.
fn posix_well_formed_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(segment_strategy(), 1..6)).prop_map(
        |(absolute, parts)| {
            let joined = parts.join("/");
            if absolute {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

fn windows_well_formed_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![
            Just(String::new()),
            Just("\\".to_string()),
            Just("C:\\".to_string()),
            Just("d:".to_string()),
            Just("\\\\server\\share\\".to_string()),
        ],
        prop::collection::vec(segment_strategy(), 1..6),
    )
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn posix_normalize_idempotent(path in posix_string_strategy()) {
        let posix = posix();
        let once = posix.normalize(&path);
        prop_assert_eq!(posix.normalize(&once), once);
    }

    #[test]
    fn windows_normalize_idempotent(path in windows_string_strategy()) {
        let win32 = win32();
        let once = win32.normalize(&path);
        prop_assert_eq!(win32.normalize(&once), once);
    }

    // join(a, b) == normalize(a + sep + b)
    #[test]
    fn posix_join_matches_normalize(a in "[a-c./]{1,8}", b in "[a-c./]{1,8}") {
        let posix = posix();
        prop_assert_eq!(posix.join(&[&a, &b]), posix.normalize(&format!("{a}/{b}")));
    }

    // resolve always yields an absolute path when a working directory exists
    #[test]
    fn posix_resolve_absolute(paths in prop::collection::vec(posix_string_strategy(), 0..4)) {
        let posix = posix();
        let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
        prop_assert!(posix.resolve(&paths).starts_with('/'));
    }

    #[test]
    fn windows_resolve_absolute(paths in prop::collection::vec(windows_string_strategy(), 0..4)) {
        let win32 = win32();
        let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
        prop_assert!(win32.is_absolute(&win32.resolve(&paths)));
    }

    // relative(x, x) == ""
    #[test]
    fn posix_relative_to_self_is_empty(path in posix_string_strategy()) {
        prop_assert_eq!(posix().relative(&path, &path), "");
    }

    #[test]
    fn windows_relative_to_self_is_empty(path in windows_string_strategy()) {
        prop_assert_eq!(win32().relative(&path, &path), "");
    }

    // format(parse(p)) == p
    #[test]
    fn posix_parse_format_round_trip(path in posix_well_formed_strategy()) {
        let posix = posix();
        let parsed = posix.parse(&path).unwrap();
        prop_assert_eq!(posix.format(&parsed.to_parts()), path);
    }

    #[test]
    fn windows_parse_format_round_trip(path in windows_well_formed_strategy()) {
        let win32 = win32();
        let parsed = win32.parse(&path).unwrap();
        prop_assert_eq!(win32.format(&parsed.to_parts()), path);
    }

    // name + ext == base, and ext never contains a separator
    #[test]
    fn parsed_name_and_ext_make_base(path in posix_string_strategy()) {
        let parsed = posix().parse(&path).unwrap();
        prop_assert_eq!(format!("{}{}", parsed.name, parsed.ext), parsed.base);
        prop_assert!(!parsed.ext.contains('/'));
        prop_assert!(parsed.ext.is_empty() || parsed.ext.starts_with('.'));
    }
}
