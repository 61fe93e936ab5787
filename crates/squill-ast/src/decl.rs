//! Declaration nodes — the targets of resolved reference links

use crate::{DataTypeId, ExprId, QueryId};

/// A declaration a reference may resolve to.
///
/// Which kinds are legal for a given reference slot is part of the
/// binder's contract; the type engine treats an impossible combination as
/// an internal defect, not a user error.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclNode {
    /// A table brought into scope by a `FROM` clause
    TableSource { name: String },
    /// A subquery brought into scope by a `FROM` clause
    SubquerySource { name: String, query: QueryId },
    /// A declared column of a table
    ColumnDef { name: String, data_type: DataTypeId },
    /// One projected item of a query's select list
    ProjectedItem {
        alias: Option<String>,
        expr: ExprId,
    },
    /// A column name exposed by a common table expression header
    CteColumn { name: String },
    /// A function declaration with its declared return type
    FunctionDef {
        name: String,
        return_type: DataTypeId,
    },
}

impl DeclNode {
    /// Short kind label, used in internal-defect messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::TableSource { .. } => "table source",
            Self::SubquerySource { .. } => "subquery source",
            Self::ColumnDef { .. } => "column definition",
            Self::ProjectedItem { .. } => "projected item",
            Self::CteColumn { .. } => "CTE column",
            Self::FunctionDef { .. } => "function definition",
        }
    }
}
