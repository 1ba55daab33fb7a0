//! Line-oriented driver tying the stages together.
//!
//! [`run`] reads declarations until the first other non-blank line, which is
//! taken as the expression, and evaluates it. [`render`] collapses the outcome
//! into the single line the binary prints.

use std::io::BufRead;

use log::debug;

use crate::declaration::{is_declaration, parse_declaration};
use crate::environment::Environment;
use crate::error::{Error, ParseError};
use crate::eval::evaluate;
use crate::language::TokenKind;
use crate::parser::parse_tokens;
use crate::{Token, tokenize};

/// Output printed for any failure, whatever its kind.
pub const ERROR_SIGNAL: &str = "[error]";

/// Read declarations and one expression from `input` and evaluate it.
///
/// Lines are trimmed and blank lines skipped. Lines that contain `=` and end
/// with `;` are declarations; the first other line is the expression and
/// nothing after it is read.
///
/// # Examples
///
/// ```rust
/// use boolcalc::run;
///
/// let input = "a = True;\nb = False;\na and not b\n";
/// assert!(run(input.as_bytes()).expect("evaluates"));
/// ```
///
/// # Errors
/// Fails on the first malformed declaration, when no expression line is
/// present, when reading fails, or when the expression cannot be evaluated.
pub fn run<R: BufRead>(input: R) -> Result<bool, Error> {
    let mut env = Environment::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !is_declaration(line) {
            return evaluate_line(line, &env);
        }
        let decl = parse_declaration(line)?;
        debug!("declared `{}` = {}", decl.name, decl.value);
        env.declare(decl.name, decl.value);
    }
    Err(Error::MissingExpression)
}

/// Tokenise, check, parse and evaluate a single expression line.
///
/// # Errors
/// Returns the first lexical, parse or undefined-variable error.
pub fn evaluate_line(line: &str, env: &Environment) -> Result<bool, Error> {
    let tokens = tokenize(line)?;
    if let Some(tok) = first_undeclared(&tokens, env) {
        return Err(ParseError::UndefinedVariable {
            name: tok.text.clone(),
        }
        .into());
    }
    let expr = parse_tokens(tokens)?;
    Ok(evaluate(&expr, env)?)
}

/// Find the first identifier token that `env` does not bind.
///
/// Lets the driver reject an expression before parsing it. Evaluation
/// enforces the same rule on its own.
#[must_use]
pub fn first_undeclared<'a>(tokens: &'a [Token], env: &Environment) -> Option<&'a Token> {
    tokens
        .iter()
        .find(|tok| tok.kind == TokenKind::Ident && !env.contains(&tok.text))
}

/// Render an outcome as the line the binary prints.
///
/// All error kinds map to [`ERROR_SIGNAL`]; the underlying error is logged at
/// debug level.
#[must_use]
pub fn render(outcome: &Result<bool, Error>) -> &'static str {
    match outcome {
        Ok(true) => "True",
        Ok(false) => "False",
        Err(err) => {
            debug!("evaluation failed: {err}");
            ERROR_SIGNAL
        }
    }
}
