//! Expression AST for boolean expressions.
//!
//! Provides a minimal structured representation of a parsed expression that
//! the evaluator walks without re-reading tokens.

/// Unary operators in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation.
    Not,
}

impl UnaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "not",
        }
    }

    #[must_use]
    pub const fn apply(self, operand: bool) -> bool {
        match self {
            Self::Not => !operand,
        }
    }
}

/// Binary operators in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Xor,
    Or,
}

impl BinaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Xor => "xor",
            Self::Or => "or",
        }
    }

    /// Combine two already evaluated operands.
    #[must_use]
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::And => lhs && rhs,
            Self::Xor => lhs ^ rhs,
            Self::Or => lhs || rhs,
        }
    }
}

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(bool),
    Variable(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A parenthesised sub-expression.
    Group(Box<Expr>),
}

impl Expr {
    /// Display the expression as a simple S-expression for tests.
    ///
    /// Literals render with their source spelling (`True`/`False`) and groups
    /// are kept visible so precedence can be checked exactly.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Literal(true) => "True".to_owned(),
            Self::Literal(false) => "False".to_owned(),
            Self::Variable(name) => name.clone(),
            Self::Unary { op, expr } => format!("({} {})", op.symbol(), expr.to_sexpr()),
            Self::Binary { op, lhs, rhs } => {
                format!("({} {} {})", op.symbol(), lhs.to_sexpr(), rhs.to_sexpr())
            }
            Self::Group(e) => format!("(group {})", e.to_sexpr()),
        }
    }
}
