//! Lexical analysis for boolean expressions.
//!
//! This module exposes [`tokenize`], which converts an expression line into a
//! sequence of [`Token`]s. Raw scanning is done by a `logos`-derived lexer;
//! letter runs are then classified as operators, literals or identifiers using
//! the static tables in [`crate::language`].

use logos::Logos;

use crate::error::LexError;
use crate::language::{self, Ident, TokenKind};

/// Byte range for a token within the expression line.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r" +")]
    Whitespace,
    // Both cases are scanned so that `True`/`False` reach classification.
    #[regex(r"[A-Za-z]+")]
    Word,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// A classified token together with its lexeme and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

fn classify_word(word: &str) -> Option<TokenKind> {
    if let Some(op) = language::operator(word) {
        return Some(TokenKind::Operator(op));
    }
    if let Some(value) = language::literal_value(word) {
        return Some(TokenKind::Bool(value));
    }
    Ident::is_valid(word).then_some(TokenKind::Ident)
}

/// Tokenise an expression line.
///
/// Spaces between tokens are skipped. Tokenisation stops at the first illegal
/// character or unclassifiable word; no partial token list is returned. An
/// input made only of spaces yields an empty list.
///
/// # Examples
///
/// ```rust
/// use boolcalc::{tokenize, Operator, TokenKind};
///
/// let tokens = tokenize("not (a or True)").expect("valid expression");
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Operator(Operator::Not),
///         TokenKind::LParen,
///         TokenKind::Ident,
///         TokenKind::Operator(Operator::Or),
///         TokenKind::Bool(true),
///         TokenKind::RParen,
///     ]
/// );
/// ```
///
/// # Errors
/// Returns [`LexError::UnexpectedChar`] for characters outside the expression
/// alphabet and [`LexError::InvalidWord`] for letter runs that are neither an
/// operator, a literal nor an identifier.
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = RawToken::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let Ok(raw) = result else {
            return Err(LexError::UnexpectedChar {
                text: text.to_owned(),
                span,
            });
        };
        let kind = match raw {
            RawToken::Whitespace => continue,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Word => {
                let Some(kind) = classify_word(text) else {
                    return Err(LexError::InvalidWord {
                        word: text.to_owned(),
                        span,
                    });
                };
                kind
            }
        };
        out.push(Token::new(kind, text, span));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Operator;
    use rstest::rstest;

    #[rstest]
    #[case("and", TokenKind::Operator(Operator::And))]
    #[case("xor", TokenKind::Operator(Operator::Xor))]
    #[case("True", TokenKind::Bool(true))]
    #[case("False", TokenKind::Bool(false))]
    #[case("andor", TokenKind::Ident)]
    fn classifies_words(#[case] word: &str, #[case] expected: TokenKind) {
        assert_eq!(classify_word(word), Some(expected));
    }

    #[rstest]
    #[case("true")]
    #[case("TRUE")]
    #[case("And")]
    #[case("Flag")]
    fn rejects_unclassifiable_words(#[case] word: &str) {
        assert_eq!(classify_word(word), None);
    }

    #[test]
    fn records_lexeme_and_span() {
        let tokens = tokenize("  ab  or").unwrap_or_else(|e| panic!("lex failed: {e}"));
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Ident, "ab", 2..4),
                Token::new(TokenKind::Operator(Operator::Or), "or", 6..8),
            ]
        );
    }
}
