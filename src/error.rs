//! Error types for each stage of evaluation.
//!
//! Every stage reports a typed error so tests can assert on the exact failure.
//! The driver collapses all of them into the single `[error]` signal.

use thiserror::Error;

use crate::Span;

/// Errors raised while tokenizing an expression line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside the expression alphabet.
    #[error("unexpected character `{text}` at {span:?}")]
    UnexpectedChar { text: String, span: Span },
    /// A letter run that is neither an operator, a literal nor an identifier.
    #[error("`{word}` at {span:?} is not an operator, literal or identifier")]
    InvalidWord { word: String, span: Span },
}

/// Errors raised while parsing a `name = value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclError {
    /// The line does not have the `name=value;` shape.
    #[error("malformed declaration: {reason}")]
    Malformed { reason: String },
    #[error("`{name}` is not a valid variable name")]
    InvalidIdentifier { name: String },
    #[error("`{text}` is not a boolean literal, expected `True` or `False`")]
    InvalidValue { text: String },
}

/// Errors raised while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected token `{text}` at {span:?}")]
    UnexpectedToken { text: String, span: Span },
    #[error("unexpected end of input at {span:?}")]
    UnexpectedEnd { span: Span },
    /// A `(` opened at `open` was never closed.
    #[error("unclosed `(` opened at {open:?}")]
    UnclosedParen { open: Span },
    /// Tokens remained after a complete expression.
    #[error("unexpected trailing token `{text}` at {span:?}")]
    TrailingToken { text: String, span: Span },
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    /// Nesting or tree height exceeded `limit`.
    #[error("expression nested deeper than {limit} levels at {span:?}")]
    TooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Source position of the error, if it has one.
    ///
    /// Undefined variables are found while walking the tree, after token
    /// positions are gone, so they carry no span.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::UnexpectedEnd { span }
            | Self::TrailingToken { span, .. }
            | Self::TooDeep { span, .. } => Some(span.clone()),
            Self::UnclosedParen { open } => Some(open.clone()),
            Self::UndefinedVariable { .. } => None,
        }
    }
}

/// Any failure that ends a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decl(#[from] DeclError),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input ended before an expression line was found.
    #[error("no expression to evaluate")]
    MissingExpression,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
