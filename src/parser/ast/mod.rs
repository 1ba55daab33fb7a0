//! Expression tree types.
//!
//! The tree is deliberately small: literals, variable references, `not`, the
//! three binary connectives and explicit grouping. Keeping parsing and
//! evaluation apart lets each be tested on its own.

mod expr;
mod precedence;

pub use expr::{BinaryOp, Expr, UnaryOp};
pub(crate) use precedence::{infix_binding_power, prefix_binding_power};
