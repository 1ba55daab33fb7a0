//! Integration tests for `name = value;` declarations.

use boolcalc::{DeclError, parse_declaration};
use rstest::rstest;

#[rstest]
#[case("a = True;", "a", true)]
#[case("flag=False;", "flag", false)]
#[case("  long   =  True  ;", "long", true)]
#[case("andy = False;", "andy", false)]
fn parses_declarations(#[case] line: &str, #[case] name: &str, #[case] value: bool) {
    let decl = parse_declaration(line).unwrap_or_else(|e| panic!("{line:?}: {e}"));
    assert_eq!(decl.name.as_str(), name);
    assert_eq!(decl.value, value);
}

#[rstest]
#[case("a = b = True;")]
#[case("a == True;")]
#[case("a = True;;")]
#[case("a = True")]
#[case("a True;")]
fn malformed_shapes_are_rejected(#[case] line: &str) {
    assert!(
        matches!(parse_declaration(line), Err(DeclError::Malformed { .. })),
        "{line:?} should be malformed"
    );
}

#[rstest]
#[case("= True;", "")]
#[case("and = True;", "and")]
#[case("true = False;", "true")]
#[case("Flag = True;", "Flag")]
#[case("x1 = True;", "x1")]
#[case("x1 = Maybe;", "x1")]
fn invalid_names_are_rejected(#[case] line: &str, #[case] name: &str) {
    assert_eq!(
        parse_declaration(line),
        Err(DeclError::InvalidIdentifier { name: name.into() })
    );
}

#[rstest]
#[case("a = true;", "true")]
#[case("a = TRUE;", "TRUE")]
#[case("a = ;", "")]
#[case("a = 1;", "1")]
fn invalid_values_are_rejected(#[case] line: &str, #[case] text: &str) {
    assert_eq!(
        parse_declaration(line),
        Err(DeclError::InvalidValue { text: text.into() })
    );
}
