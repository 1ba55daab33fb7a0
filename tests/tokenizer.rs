use boolcalc::{LexError, Operator, TokenKind, tokenize};
use rstest::{fixture, rstest};

#[fixture]
fn simple_input() -> &'static str {
    "not (alpha xor False)"
}

#[rstest]
#[case("and", vec![TokenKind::Operator(Operator::And)])]
#[case("True", vec![TokenKind::Bool(true)])]
#[case("flag", vec![TokenKind::Ident])]
#[case("(x)", vec![TokenKind::LParen, TokenKind::Ident, TokenKind::RParen])]
#[case("a or b", vec![TokenKind::Ident, TokenKind::Operator(Operator::Or), TokenKind::Ident])]
#[case("   ", vec![])]
fn token_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind>) {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
}

#[rstest]
fn spans_match_lexemes(simple_input: &str) {
    let tokens = tokenize(simple_input).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(tokens.len(), 6);
    for tok in tokens {
        let text = simple_input.get(tok.span.clone()).unwrap_or("");
        assert_eq!(text, tok.text);
    }
}

#[rstest]
#[case("a1", "1", 1, 2)]
#[case("a & b", "&", 2, 3)]
#[case("a\tb", "\t", 1, 2)]
#[case("x = True", "=", 2, 3)]
fn illegal_character_aborts(
    #[case] source: &str,
    #[case] text: &str,
    #[case] start: usize,
    #[case] end: usize,
) {
    assert_eq!(
        tokenize(source),
        Err(LexError::UnexpectedChar {
            text: text.into(),
            span: start..end,
        })
    );
}

#[rstest]
#[case("true")]
#[case("TRUE")]
#[case("Alpha")]
#[case("aB")]
#[case("A")]
fn unclassifiable_words_are_rejected(#[case] source: &str) {
    assert!(
        matches!(tokenize(source), Err(LexError::InvalidWord { ref word, .. }) if word == source),
        "{source:?} should be an invalid word"
    );
}
