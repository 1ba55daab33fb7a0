//! Core Pratt parser implementation and entry points.
//!
//! This module defines the [`Pratt`] struct and the public
//! [`parse_tokens`] and [`parse_expression`] functions which build
//! expression trees from tokens or raw source.

use crate::error::{Error, ParseError};
use crate::parser::ast::Expr;
use crate::{Span, Token, tokenize};

use super::token_stream::TokenStream;

/// Deepest the parser recurses, which bounds nested `(` and `not`.
pub const MAX_NESTING: usize = 256;

/// Tallest tree the parser builds. Evaluation and drop recurse once per level.
pub const MAX_HEIGHT: usize = 2048;

/// A parsed subtree together with its height.
pub(super) type Subtree = (Expr, usize);

pub(in crate::parser::expression) struct Pratt<I>
where
    I: Iterator<Item = Token>,
{
    pub(super) ts: TokenStream<I>,
    depth: usize,
}

/// Reject a node whose height would exceed [`MAX_HEIGHT`].
pub(super) fn check_height(height: usize, span: Span) -> Result<usize, ParseError> {
    if height > MAX_HEIGHT {
        return Err(ParseError::TooDeep {
            limit: MAX_HEIGHT,
            span,
        });
    }
    Ok(height)
}

/// Parse a token sequence into an [`Expr`].
///
/// Every token must be consumed: input left over after a complete
/// expression, such as a stray `)` or a dangling operand, is an error.
/// Input nested deeper than [`MAX_NESTING`] or producing a tree taller than
/// [`MAX_HEIGHT`] is rejected with [`ParseError::TooDeep`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered. There is no recovery.
pub fn parse_tokens<T>(tokens: T) -> Result<Expr, ParseError>
where
    T: IntoIterator<Item = Token>,
{
    let mut parser = Pratt::new(tokens.into_iter());
    let (expr, _) = parser.parse_expr(0)?;
    if let Some(tok) = parser.ts.check_unexpected_token() {
        return Err(ParseError::TrailingToken {
            text: tok.text,
            span: tok.span,
        });
    }
    Ok(expr)
}

/// Parse a source string into an [`Expr`].
///
/// This tokenises the input and runs the Pratt parser over the result.
///
/// # Examples
///
/// ```rust
/// use boolcalc::parse_expression;
///
/// let expr = parse_expression("a or b and not c").expect("valid expression");
/// assert_eq!(expr.to_sexpr(), "(or a (and b (not c)))");
/// ```
///
/// # Errors
/// Returns [`Error::Lex`] when tokenisation fails and [`Error::Parse`] when
/// the tokens do not form a single expression.
pub fn parse_expression(src: &str) -> Result<Expr, Error> {
    let tokens = tokenize(src)?;
    Ok(parse_tokens(tokens)?)
}

impl<I> Pratt<I>
where
    I: Iterator<Item = Token>,
{
    #[must_use]
    pub(super) fn new(tokens: I) -> Self {
        Self {
            ts: TokenStream::new(tokens),
            depth: 0,
        }
    }

    pub(super) fn parse_expr(&mut self, min_bp: u8) -> Result<Subtree, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep {
                limit: MAX_NESTING,
                span: self.ts.peek_span(),
            });
        }
        self.depth += 1;
        let parsed = self
            .parse_prefix()
            .and_then(|lhs| self.parse_infix(lhs, min_bp));
        self.depth -= 1;
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{and, assert_parse_error, group, lit, not, or, var, xor};
    use rstest::rstest;

    fn parse(src: &str) -> Result<Expr, ParseError> {
        let tokens = tokenize(src).unwrap_or_else(|e| panic!("lex {src:?}: {e}"));
        parse_tokens(tokens)
    }

    #[rstest]
    #[case("a", var("a"))]
    #[case("False", lit(false))]
    #[case("not not a", not(not(var("a"))))]
    #[case("a and b and c", and(and(var("a"), var("b")), var("c")))]
    #[case("a xor b xor c", xor(xor(var("a"), var("b")), var("c")))]
    #[case("a or b and c", or(var("a"), and(var("b"), var("c"))))]
    #[case("a xor b or c", or(xor(var("a"), var("b")), var("c")))]
    #[case("a and b xor c", xor(and(var("a"), var("b")), var("c")))]
    #[case("not a and b", and(not(var("a")), var("b")))]
    #[case("not (a or b)", not(group(or(var("a"), var("b")))))]
    #[case("((a))", group(group(var("a"))))]
    fn builds_trees(#[case] src: &str, #[case] expected: Expr) {
        let expr = parse(src).unwrap_or_else(|e| panic!("source {src:?} errors: {e}"));
        assert_eq!(expr, expected);
    }

    #[rstest]
    #[case("x and (a and b", "unclosed `(`", 6, 7)]
    #[case("a and ", "unexpected end of input", 5, 5)]
    #[case("", "unexpected end of input", 0, 0)]
    #[case("and a", "unexpected token `and`", 0, 3)]
    #[case("()", "unexpected token `)`", 1, 2)]
    #[case("(a b)", "unexpected token `b`", 3, 4)]
    #[case("a b", "unexpected trailing token `b`", 2, 3)]
    #[case("(a))", "unexpected trailing token `)`", 3, 4)]
    #[case("a not b", "unexpected trailing token `not`", 2, 5)]
    #[case(&format!("{}a", "(".repeat(300)), "nested deeper than 256 levels", 256, 257)]
    #[case(&format!("{}a", "not ".repeat(300)), "nested deeper than 256 levels", 1024, 1027)]
    #[case(&format!("{}a", "a or ".repeat(2100)), "nested deeper than 2048 levels", 10237, 10239)]
    fn reports_first_error(
        #[case] src: &str,
        #[case] msg: &str,
        #[case] start: usize,
        #[case] end: usize,
    ) {
        assert_parse_error(&parse(src), msg, start, end);
    }

    #[rstest]
    #[case(&format!("{}a{}", "(".repeat(200), ")".repeat(200)))]
    #[case(&format!("{}a", "not ".repeat(250)))]
    #[case(&format!("{}a", "a xor ".repeat(2000)))]
    fn accepts_input_within_limits(#[case] src: &str) {
        let result = parse(src);
        assert!(result.is_ok(), "{src:.20}... failed: {result:?}");
    }
}
