//! Pratt parser for boolean expressions.
//!
//! Provides [`parse_tokens`] and [`parse_expression`], a hand-rolled Pratt
//! parser over the tokenizer's output. The implementation is split across
//! submodules: [`pratt`] hosts the core parser and entry points, [`prefix`]
//! handles literals, variables, groups and `not`, and [`infix`] folds the
//! binary connectives.

mod infix;
mod pratt;
mod prefix;
mod token_stream;

pub use pratt::{MAX_HEIGHT, MAX_NESTING, parse_expression, parse_tokens};

use pratt::Pratt;
