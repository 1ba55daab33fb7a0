//! Variable bindings consulted during evaluation.

use std::collections::HashMap;

use log::warn;

use crate::declaration::Declaration;
use crate::language::Ident;

/// Mapping from identifier to boolean value.
///
/// Bindings are added during the declaration phase and only read afterwards.
/// Re-declaring a name replaces the earlier value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<Ident, bool>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn declare(&mut self, name: Ident, value: bool) -> Option<bool> {
        let previous = self.vars.insert(name.clone(), value);
        if let Some(old) = previous {
            warn!("`{name}` redeclared, {old} replaced by {value}");
        }
        previous
    }

    /// Look up the value bound to `name`, or `None` if it was never declared.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<bool> {
        self.vars.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Extend<Declaration> for Environment {
    fn extend<T: IntoIterator<Item = Declaration>>(&mut self, iter: T) {
        for decl in iter {
            self.declare(decl.name, decl.value);
        }
    }
}

impl FromIterator<Declaration> for Environment {
    fn from_iter<T: IntoIterator<Item = Declaration>>(iter: T) -> Self {
        let mut env = Self::new();
        env.extend(iter);
        env
    }
}
