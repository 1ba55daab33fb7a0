//! Parsing of `name = True;` variable declarations.
//!
//! Declarations are independent of the expression grammar. Spaces are removed
//! first, then a small `chumsky` parser splits the line into its name and
//! value parts before each part is validated on its own.

use chumsky::prelude::*;
use log::debug;

use crate::error::DeclError;
use crate::language::{self, Ident};

/// A single variable binding read from a declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: Ident,
    pub value: bool,
}

/// Whether `line` should be treated as a declaration.
///
/// A line is routed to [`parse_declaration`] when it contains `=` and ends
/// with `;`. Anything else is taken to be the expression.
#[must_use]
pub fn is_declaration(line: &str) -> bool {
    line.contains('=') && line.ends_with(';')
}

/// Split a space-free declaration into its raw name and value text.
///
/// The name may not contain `=`; the value may contain neither `=` nor `;`.
/// Exactly one `;` must close the line.
fn declaration_shape() -> impl Parser<char, (String, String), Error = Simple<char>> {
    let name = filter(|c: &char| *c != '=').repeated().collect::<String>();
    let value = filter(|c: &char| *c != '=' && *c != ';')
        .repeated()
        .collect::<String>();
    name.then_ignore(just('='))
        .then(value)
        .then_ignore(just(';'))
        .then_ignore(end())
}

/// Parse one trimmed declaration line.
///
/// # Examples
///
/// ```rust
/// use boolcalc::parse_declaration;
///
/// let decl = parse_declaration("flag = True;").expect("valid declaration");
/// assert_eq!(decl.name.as_str(), "flag");
/// assert!(decl.value);
/// ```
///
/// # Errors
/// Returns [`DeclError::Malformed`] when the line is not of the form
/// `name=value;`, [`DeclError::InvalidIdentifier`] when the name breaks the
/// identifier grammar and [`DeclError::InvalidValue`] when the value is not
/// exactly `True` or `False`.
pub fn parse_declaration(line: &str) -> Result<Declaration, DeclError> {
    let compact: String = line.chars().filter(|c| *c != ' ').collect();
    let (name, value) = declaration_shape()
        .parse(compact.as_str())
        .map_err(|errors| {
            debug!("declaration {compact:?} rejected: {errors:?}");
            let reason = errors
                .first()
                .map_or_else(|| "invalid declaration".to_owned(), ToString::to_string);
            DeclError::Malformed { reason }
        })?;
    let Some(name) = Ident::parse(&name) else {
        return Err(DeclError::InvalidIdentifier { name });
    };
    let Some(value) = language::literal_value(&value) else {
        return Err(DeclError::InvalidValue { text: value });
    };
    Ok(Declaration { name, value })
}
