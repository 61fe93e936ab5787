//! SQL operators recognized by the type engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators, including the negatable membership and pattern
/// operators (`IN`, `LIKE`) that may carry a `NOT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Modulo
    Modulo,
    /// Equality
    Equal,
    /// Inequality
    NotEqual,
    /// Less than
    Less,
    /// Less than or equal
    LessOrEqual,
    /// Greater than
    Greater,
    /// Greater than or equal
    GreaterOrEqual,
    /// Logical and
    And,
    /// Logical or
    Or,
    /// String concatenation
    Concatenate,
    /// Membership test (element in list)
    In,
    /// Pattern match
    Like,
}

impl BinaryOperator {
    /// The operator's source-level symbol or keyword.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concatenate => "||",
            Self::In => "IN",
            Self::Like => "LIKE",
        }
    }

    /// Check if this is a comparison operator
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::Less
                | Self::LessOrEqual
                | Self::Greater
                | Self::GreaterOrEqual
        )
    }

    /// Check if this operator may appear in a negatable expression
    pub const fn is_negatable(&self) -> bool {
        matches!(self, Self::In | Self::Like)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// Logical negation
    Not,
    /// Numeric identity
    Plus,
    /// Numeric negation
    Minus,
}

impl UnaryOperator {
    /// The operator's source-level symbol or keyword.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
