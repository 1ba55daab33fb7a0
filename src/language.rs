//! Language definitions for boolean expressions.
//!
//! This module holds the vocabulary shared by the tokenizer, the declaration
//! parser and the expression parser: the operator set, token kinds, and the
//! identifier grammar. The reserved-word and literal tables are static `phf`
//! collections so lookups never touch mutable global state.

use std::borrow::Borrow;
use std::fmt;

use phf::{phf_map, phf_set};

/// Boolean operators recognised by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Xor,
}

impl Operator {
    /// The lowercase keyword spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Xor => "xor",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A variable name satisfying the identifier grammar.
    Ident,
    /// `True` or `False`.
    Bool(bool),
    Operator(Operator),
    LParen,
    RParen,
}

static OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
    "and" => Operator::And,
    "or" => Operator::Or,
    "not" => Operator::Not,
    "xor" => Operator::Xor,
};

/// Boolean literals are spelled with a capital initial, unlike every other word.
static LITERALS: phf::Map<&'static str, bool> = phf_map! {
    "True" => true,
    "False" => false,
};

/// Words that can never name a variable.
static RESERVED: phf::Set<&'static str> = phf_set! {
    "and", "or", "not", "xor", "true", "false",
};

/// Look up the operator spelled by `word`.
#[must_use]
pub fn operator(word: &str) -> Option<Operator> {
    OPERATORS.get(word).copied()
}

/// Look up the boolean value spelled by `word`.
///
/// Matching is case-sensitive: only `True` and `False` are accepted.
#[must_use]
pub fn literal_value(word: &str) -> Option<bool> {
    LITERALS.get(word).copied()
}

/// Whether `word` is reserved and therefore not a valid identifier.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word)
}

/// A validated variable name.
///
/// Identifiers are non-empty, consist solely of lowercase ASCII letters and
/// are never a reserved word. The only way to obtain one is [`Ident::parse`],
/// so every `Ident` upholds the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(String);

impl Ident {
    /// Validate `text` against the identifier grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolcalc::Ident;
    ///
    /// assert!(Ident::parse("flag").is_some());
    /// assert!(Ident::parse("xor").is_none());
    /// assert!(Ident::parse("Flag").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::is_valid(text).then(|| Self(text.to_owned()))
    }

    /// Check `text` against the identifier grammar without allocating.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase()) && !is_reserved(text)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Ident {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
