//! Operator precedence table for boolean expressions.
//!
//! This module centralizes binding power definitions for prefix and infix
//! operators. From loosest to tightest: `or`, `xor`, `and`, then prefix
//! `not`. Every infix operator is left-associative.

use crate::language::Operator;

use super::{BinaryOp, UnaryOp};

#[derive(Debug, Clone, Copy)]
pub(super) struct PrefixEntry {
    pub bp: u8,
    pub op: UnaryOp,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct InfixEntry {
    pub l_bp: u8,
    pub r_bp: u8,
    pub op: BinaryOp,
}

const PREFIX_TABLE: &[(Operator, PrefixEntry)] = &[(
    Operator::Not,
    PrefixEntry {
        bp: 40,
        op: UnaryOp::Not,
    },
)];

const INFIX_TABLE: &[(Operator, InfixEntry)] = &[
    (
        Operator::And,
        InfixEntry {
            l_bp: 30,
            r_bp: 31,
            op: BinaryOp::And,
        },
    ),
    (
        Operator::Xor,
        InfixEntry {
            l_bp: 20,
            r_bp: 21,
            op: BinaryOp::Xor,
        },
    ),
    (
        Operator::Or,
        InfixEntry {
            l_bp: 10,
            r_bp: 11,
            op: BinaryOp::Or,
        },
    ),
];

/// Lookup the binding power and [`UnaryOp`] for a prefix operator.
pub(crate) fn prefix_binding_power(op: Operator) -> Option<(u8, UnaryOp)> {
    PREFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (op == *k).then_some((entry.bp, entry.op)))
}

/// Lookup the binding power and [`BinaryOp`] for an infix operator.
///
/// Returns the left and right binding powers along with the operator variant.
pub(crate) fn infix_binding_power(op: Operator) -> Option<(u8, u8, BinaryOp)> {
    INFIX_TABLE
        .iter()
        .find_map(|(k, entry)| (op == *k).then_some((entry.l_bp, entry.r_bp, entry.op)))
}
