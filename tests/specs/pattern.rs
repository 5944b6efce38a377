//! Pattern helper behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > is_match("^a.*z$", "abcz") is true.
#[test]
fn anchored_pattern_matches() {
    assert!(is_match_str("^a.*z$", "abcz"));
    assert!(is_match("^a.*z$", b"abcz"));
}

/// > is_match("[", "anything") is false, with no panic.
#[test]
fn invalid_pattern_is_no_match() {
    assert!(!is_match_str("[", "anything"));
    assert!(!is_match("[", b"anything"));
}

/// > replace("o", "foo", "0") is "f00" with no error.
#[test]
fn replace_substitutes_every_match() {
    assert_eq!(replace_str("o", "foo", "0").unwrap(), "f00");
    assert_eq!(replace("o", b"foo", b"0").unwrap(), b"f00".to_vec());
}

/// > replace("[", "foo", "0") returns "foo" alongside an error.
#[test]
fn replace_with_invalid_pattern_returns_input_and_error() {
    let err = replace_str("[", "foo", "0").unwrap_err();
    assert!(!err.to_string().is_empty());
    assert_eq!(err.into_input(), "foo");

    let err = replace("[", b"foo", b"0").unwrap_err();
    assert_eq!(err.into_input(), b"foo".to_vec());
}

/// > Replacement text may reference captured groups.
#[test]
fn replace_expands_capture_groups() {
    assert_eq!(
        replace_str(r"(\w+)\s(\w+)", "hello world", "$2 $1").unwrap(),
        "world hello"
    );
}

/// > A compiled pattern behaves like the one-shot helpers.
#[test]
fn compiled_pattern_agrees_with_free_functions() {
    let re = CompiledPattern::new("o+").unwrap();
    for input in ["foo", "bar", "boo boo", ""] {
        assert_eq!(re.is_match_str(input), is_match_str("o+", input));
        assert_eq!(re.replace_all_str(input, "0"), replace_str("o+", input, "0").unwrap());
    }
}
