//! Helpers for constructing expression nodes in tests.

use super::Name;
use crate::parser::ast::{BinaryOp, Expr, UnaryOp};

/// Construct a variable [`Expr::Variable`].
///
/// Accepts any type convertible into [`Name`].
#[must_use]
pub fn var(name: impl Into<Name>) -> Expr {
    let name: Name = name.into();
    Expr::Variable(name.0)
}

/// Construct a boolean [`Expr::Literal`].
#[must_use]
pub const fn lit(value: bool) -> Expr {
    Expr::Literal(value)
}

/// Construct a parenthesised [`Expr::Group`].
#[must_use]
pub fn group(expr: Expr) -> Expr {
    Expr::Group(Box::new(expr))
}

/// Construct a negation [`Expr::Unary`].
#[must_use]
pub fn not(expr: Expr) -> Expr {
    Expr::Unary {
        op: UnaryOp::Not,
        expr: Box::new(expr),
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

#[must_use]
pub fn and(lhs: Expr, rhs: Expr) -> Expr {
    binary(BinaryOp::And, lhs, rhs)
}

#[must_use]
pub fn xor(lhs: Expr, rhs: Expr) -> Expr {
    binary(BinaryOp::Xor, lhs, rhs)
}

#[must_use]
pub fn or(lhs: Expr, rhs: Expr) -> Expr {
    binary(BinaryOp::Or, lhs, rhs)
}
