//! Minimal token stream for the Pratt parser.
//!
//! Provides lookahead, expectation and end-of-input span helpers over an
//! iterator of [`Token`]s.

use std::iter::Peekable;

use crate::error::ParseError;
use crate::language::TokenKind;
use crate::{Span, Token};

pub(super) struct TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    iter: Peekable<I>,
    /// Byte offset just past the last consumed token.
    end: usize,
}

impl<I> TokenStream<I>
where
    I: Iterator<Item = Token>,
{
    pub(super) fn new(iter: I) -> Self {
        Self {
            iter: iter.peekable(),
            end: 0,
        }
    }

    pub(super) fn next_tok(&mut self) -> Option<Token> {
        let tok = self.iter.next()?;
        self.end = tok.span.end;
        Some(tok)
    }

    pub(super) fn peek_kind(&mut self) -> Option<TokenKind> {
        self.iter.peek().map(|t| t.kind)
    }

    /// Span of the next token, or the end-of-input span.
    pub(super) fn peek_span(&mut self) -> Span {
        let end = self.end;
        self.iter.peek().map_or(end..end, |t| t.span.clone())
    }

    /// Consume a token of `kind`, or report what was found instead.
    ///
    /// `open` is the span of the construct that requires the token and is
    /// reported when the input ends first.
    pub(super) fn expect_closing(
        &mut self,
        kind: TokenKind,
        open: Span,
    ) -> Result<(), ParseError> {
        match self.next_tok() {
            Some(tok) if tok.kind == kind => Ok(()),
            Some(tok) => Err(ParseError::UnexpectedToken {
                text: tok.text,
                span: tok.span,
            }),
            None => Err(ParseError::UnclosedParen { open }),
        }
    }

    /// Consume the next token if any remain.
    ///
    /// Used after parsing a complete expression to detect trailing tokens.
    pub(super) fn check_unexpected_token(&mut self) -> Option<Token> {
        self.next_tok()
    }

    pub(super) fn eof_span(&self) -> Span {
        self.end..self.end
    }
}
