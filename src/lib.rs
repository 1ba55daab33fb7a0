//! Library crate for boolcalc.
//!
//! Evaluates a boolean expression over variables bound by `name = True;`
//! declarations. The stages are exposed separately: [`tokenize`],
//! [`parse_declaration`], [`parse_tokens`] and [`evaluate`], with
//! [`run`] wiring them together for line-oriented input.

#![forbid(unsafe_code)]

pub mod declaration;
pub mod driver;
pub mod environment;
pub mod error;
pub mod eval;
pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use declaration::{Declaration, is_declaration, parse_declaration};
pub use driver::{ERROR_SIGNAL, evaluate_line, first_undeclared, render, run};
pub use environment::Environment;
pub use error::{DeclError, Error, LexError, ParseError};
pub use eval::{evaluate, evaluate_tokens};
pub use language::{Ident, Operator, TokenKind};
pub use parser::{ast, parse_expression, parse_tokens};
pub use tokenizer::{Span, Token, tokenize};
