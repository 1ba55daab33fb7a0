//! Parsing of boolean expressions into an [`ast::Expr`] tree.
//!
//! [`expression`] hosts the Pratt parser that walks a token sequence and
//! [`ast`] defines the tree it produces along with the operator precedence
//! table. Evaluation of the tree lives in [`crate::eval`].

pub mod ast;
pub mod expression;

pub use expression::{MAX_HEIGHT, MAX_NESTING, parse_expression, parse_tokens};
