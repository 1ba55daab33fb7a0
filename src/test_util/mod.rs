//! Helpers for constructing expression nodes and asserting parser errors in
//! tests.
//!
//! These functions reduce boilerplate when asserting over [`Expr`] trees and
//! verifying that failures carry the expected message and span.
//!
//! [`Expr`]: crate::parser::ast::Expr

mod assertions;
mod expressions;

pub use assertions::{assert_parse_error, assert_undefined_variable};
pub use expressions::{and, group, lit, not, or, var, xor};

/// Typed wrapper for variable names.
#[derive(Debug, Clone)]
pub struct Name(pub(crate) String);

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Expected fragment of a rendered error message.
#[derive(Debug, Clone)]
pub enum ErrorPattern {
    Custom(String),
}

impl From<&str> for ErrorPattern {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_string())
    }
}
