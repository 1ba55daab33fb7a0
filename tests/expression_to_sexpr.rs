//! Integration tests for operator precedence and associativity.
//!
//! Each case parses source text through the public `parse_expression` API and
//! compares the canonical S-expression form.

use boolcalc::{Error, ParseError, parse_expression};
use rstest::rstest;

#[rstest]
#[case("a or b and c", "(or a (and b c))")]
#[case("a and b or c", "(or (and a b) c)")]
#[case("a or b xor c", "(or a (xor b c))")]
#[case("a xor b and c", "(xor a (and b c))")]
#[case("a or b or c", "(or (or a b) c)")]
#[case("a xor b xor c", "(xor (xor a b) c)")]
#[case("not a or b", "(or (not a) b)")]
#[case("not not not a", "(not (not (not a)))")]
#[case("a and not b", "(and a (not b))")]
#[case("(a or b) and c", "(and (group (or a b)) c)")]
#[case("not (True xor False)", "(not (group (xor True False)))")]
#[case("p xor q or p", "(or (xor p q) p)")]
fn precedence_shapes(#[case] src: &str, #[case] expected: &str) {
    let expr = parse_expression(src).unwrap_or_else(|e| panic!("source {src:?} errors: {e}"));
    assert_eq!(expr.to_sexpr(), expected);
}

#[rstest]
#[case("(a and b")]
#[case("((a)")]
#[case("not (")]
fn unbalanced_open_paren_is_unclosed(#[case] src: &str) {
    assert!(
        matches!(
            parse_expression(src),
            Err(Error::Parse(
                ParseError::UnclosedParen { .. } | ParseError::UnexpectedEnd { .. }
            ))
        ),
        "{src:?} should fail"
    );
}

#[rstest]
#[case("a and b)")]
#[case("a or")]
#[case(")")]
#[case("not")]
#[case("a b")]
fn grammar_violations_fail(#[case] src: &str) {
    assert!(
        matches!(parse_expression(src), Err(Error::Parse(_))),
        "{src:?} should fail to parse"
    );
}

#[test]
fn lexical_errors_are_reported_before_parsing() {
    assert!(matches!(parse_expression("a | b"), Err(Error::Lex(_))));
}
