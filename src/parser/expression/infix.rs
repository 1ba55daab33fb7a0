//! Infix operator handling for the Pratt parser.

use crate::Token;
use crate::error::ParseError;
use crate::language::TokenKind;
use crate::parser::ast::{Expr, infix_binding_power};

use super::pratt::{Pratt, Subtree, check_height};

impl<I> Pratt<I>
where
    I: Iterator<Item = Token>,
{
    /// Fold binary connectives whose left binding power is at least `min_bp`.
    ///
    /// Chains grow the tree to the left, so each fold adds one level of
    /// height.
    pub(super) fn parse_infix(&mut self, lhs: Subtree, min_bp: u8) -> Result<Subtree, ParseError> {
        let (mut lhs, mut height) = lhs;
        while let Some(TokenKind::Operator(op_kind)) = self.ts.peek_kind() {
            let Some((l_bp, r_bp, op)) = infix_binding_power(op_kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let op_span = self.ts.peek_span();
            self.ts.next_tok();
            let (rhs, rhs_height) = self.parse_expr(r_bp)?;
            height = check_height(height.max(rhs_height) + 1, op_span)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok((lhs, height))
    }
}
