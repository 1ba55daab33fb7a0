//! Assertion helpers for verifying parser errors in tests.

use std::fmt::Debug;

use super::ErrorPattern;
use crate::error::ParseError;

/// Assert that `result` failed with a [`ParseError`] whose message contains
/// `expected_pattern` and whose span is `start..end`.
///
/// # Panics
/// Panics if `result` is `Ok`, if the message does not match, or if the
/// error carries a different span or none at all.
#[track_caller]
pub fn assert_parse_error<T: Debug>(
    result: &Result<T, ParseError>,
    expected_pattern: impl Into<ErrorPattern>,
    start: usize,
    end: usize,
) {
    let pattern: ErrorPattern = expected_pattern.into();
    let Err(error) = result else {
        panic!("expected parse error, got {result:?}");
    };
    let rendered = error.to_string();
    let ErrorPattern::Custom(msg) = &pattern;
    assert!(
        rendered.contains(msg.as_str()),
        "expected error to contain pattern '{pattern:?}', got '{rendered}'",
    );
    assert_eq!(error.span(), Some(start..end), "span mismatch for '{rendered}'");
}

/// Assert that `result` failed because `name` is not declared.
///
/// # Panics
/// Panics if `result` is `Ok` or failed for another reason.
#[track_caller]
pub fn assert_undefined_variable<T: Debug>(result: &Result<T, ParseError>, name: &str) {
    match result {
        Err(ParseError::UndefinedVariable { name: found }) => {
            assert_eq!(found, name, "undefined variable mismatch");
        }
        other => panic!("expected undefined variable `{name}`, got {other:?}"),
    }
}
