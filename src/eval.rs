//! Tree-walking evaluation of parsed expressions.
//!
//! Both operands of a binary connective are always evaluated, left first, so
//! an undefined variable is reported wherever it appears in the tree.
//! Recursion follows the tree height, which the parser caps at
//! [`crate::parser::MAX_HEIGHT`].

use crate::Token;
use crate::environment::Environment;
use crate::error::ParseError;
use crate::parser::ast::Expr;
use crate::parser::parse_tokens;

/// Evaluate `expr` against the bindings in `env`.
///
/// # Errors
/// Returns [`ParseError::UndefinedVariable`] for the first variable, in
/// left-to-right order, that `env` does not bind.
pub fn evaluate(expr: &Expr, env: &Environment) -> Result<bool, ParseError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Variable(name) => env
            .lookup(name)
            .ok_or_else(|| ParseError::UndefinedVariable { name: name.clone() }),
        Expr::Group(inner) => evaluate(inner, env),
        Expr::Unary { op, expr } => Ok(op.apply(evaluate(expr, env)?)),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, env)?;
            let rhs = evaluate(rhs, env)?;
            Ok(op.apply(lhs, rhs))
        }
    }
}

/// Parse `tokens` and evaluate the result in one step.
///
/// # Examples
///
/// ```rust
/// use boolcalc::{Environment, Ident, evaluate_tokens, tokenize};
///
/// let mut env = Environment::new();
/// env.declare(Ident::parse("p").expect("identifier"), false);
/// let tokens = tokenize("not p xor True").expect("valid expression");
/// assert_eq!(evaluate_tokens(tokens, &env), Ok(false));
/// ```
///
/// # Errors
/// Returns any [`ParseError`] raised while parsing or evaluating.
pub fn evaluate_tokens<T>(tokens: T, env: &Environment) -> Result<bool, ParseError>
where
    T: IntoIterator<Item = Token>,
{
    let expr = parse_tokens(tokens)?;
    evaluate(&expr, env)
}
