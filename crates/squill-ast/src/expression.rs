//! Expression nodes

use crate::{BinaryOperator, DataTypeId, DeclId, ExprId, QueryId, UnaryOperator};

/// An expression node of the resolved syntax tree.
///
/// The set of kinds is closed: the type engine matches exhaustively over
/// this enum, and a kind it does not handle is a grammar/AST mismatch.
///
/// All reference slots (`Option<DeclId>`) were filled in by the upstream
/// binder; `None` means resolution failed for that name.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `CAST(operand AS target)`
    Cast {
        operand: ExprId,
        target: DataTypeId,
    },
    /// Numeric literal, with the lexeme exactly as written in the source
    NumberLiteral { lexeme: String },
    /// `NULL`
    NullLiteral,
    /// Hex string literal, e.g. `x'1A'`
    HexStringLiteral { lexeme: String },
    /// String literal
    StringLiteral { value: String },
    /// A delimited identifier used where a string is expected
    IdentifierString { value: String },
    /// `TRUE` / `FALSE`
    BooleanLiteral { value: bool },
    /// `variable.column` — a column addressed through a table or subquery
    /// variable in scope
    TableColumnRef {
        /// Link to the `TableSource` or `SubquerySource` the variable
        /// denotes
        variable: Option<DeclId>,
        /// Link to the column within that source: a `ColumnDef` for table
        /// sources, a `ProjectedItem` for subquery sources
        column: Option<DeclId>,
    },
    /// A bare column name
    ColumnRef { target: Option<DeclId> },
    /// Parenthesized expression or list, `(a)` or `(a, b, c)`
    ExprList { items: Vec<ExprId> },
    /// Unary operator application
    Unary {
        op: UnaryOperator,
        operand: ExprId,
    },
    /// Binary operator application
    Binary {
        op: BinaryOperator,
        left: ExprId,
        right: ExprId,
    },
    /// Comparison/membership operator that may carry `NOT`
    /// (`x NOT IN (...)`, `x NOT LIKE y`)
    Negatable {
        op: BinaryOperator,
        negated: bool,
        left: ExprId,
        right: ExprId,
    },
    /// `operand BETWEEN low AND high`
    Between {
        operand: ExprId,
        low: ExprId,
        high: ExprId,
    },
    /// Function invocation; the link targets a `FunctionDef`
    FunctionCall {
        function: Option<DeclId>,
        args: Vec<ExprId>,
    },
    /// A query used in expression position
    Subquery { query: QueryId },
}
