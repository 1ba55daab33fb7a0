//! Parsing of prefix expressions and literals for the Pratt parser.

use crate::error::ParseError;
use crate::language::TokenKind;
use crate::parser::ast::{Expr, prefix_binding_power};
use crate::{Span, Token};

use super::pratt::{Pratt, Subtree, check_height};

fn unexpected(tok: Token) -> ParseError {
    ParseError::UnexpectedToken {
        text: tok.text,
        span: tok.span,
    }
}

impl<I> Pratt<I>
where
    I: Iterator<Item = Token>,
{
    pub(super) fn parse_prefix(&mut self) -> Result<Subtree, ParseError> {
        let Some(tok) = self.ts.next_tok() else {
            return Err(ParseError::UnexpectedEnd {
                span: self.ts.eof_span(),
            });
        };
        match tok.kind {
            TokenKind::Bool(value) => Ok((Expr::Literal(value), 1)),
            TokenKind::Ident => Ok((Expr::Variable(tok.text), 1)),
            TokenKind::LParen => self.parse_parenthesized_expr(tok.span),
            TokenKind::Operator(op) => {
                let Some((bp, op)) = prefix_binding_power(op) else {
                    return Err(unexpected(tok));
                };
                let (rhs, height) = self.parse_expr(bp)?;
                let height = check_height(height + 1, tok.span)?;
                let expr = Expr::Unary {
                    op,
                    expr: Box::new(rhs),
                };
                Ok((expr, height))
            }
            TokenKind::RParen => Err(unexpected(tok)),
        }
    }

    fn parse_parenthesized_expr(&mut self, open: Span) -> Result<Subtree, ParseError> {
        let (inner, height) = self.parse_expr(0)?;
        self.ts.expect_closing(TokenKind::RParen, open.clone())?;
        let height = check_height(height + 1, open)?;
        Ok((Expr::Group(Box::new(inner)), height))
    }
}
