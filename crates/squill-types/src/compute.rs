//! Type computation orchestrator
//!
//! Recursive dispatch over expression and data-type nodes of a resolved
//! syntax tree. The orchestrator consults the dialect's conversion table
//! and operator registry as pure decision tables and asks a
//! column-enumeration collaborator for a query's visible projection when
//! deriving row types.
//!
//! Three outcomes per call:
//! - `Ok(Some(ty))` — the node has a type;
//! - `Ok(None)` — expected inapplicability (unresolved reference,
//!   rejected cast, unmatched operator); containing expressions propagate
//!   it unless a rule overrides (`BETWEEN` is always Boolean);
//! - `Err(_)` — the tree violates its own contract, or the construct is a
//!   known gap (`TypeError::NotYetSupported`).

use log::trace;

use squill_ast::{
    BinaryOperator, DataTypeId, DataTypeNode, DeclId, DeclNode, ExprId, ExprKind, QueryId,
    SyntaxTree,
};

use crate::{
    ConversionMode, Dialect, RowColumn, TypeDescriptor, TypeError, TypeResult,
    classify_numeric_literal,
};

/// A node the engine can type: an expression or a data-type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedNode {
    Expr(ExprId),
    DataType(DataTypeId),
}

/// One column of a query's visible projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedColumn {
    /// Exposed column name, if any
    pub name: Option<String>,
    /// The expression whose type represents the column
    pub expr: ExprId,
}

/// Supplies the ordered, visible projection of a query.
///
/// Row-type derivation goes through this trait instead of walking select
/// lists itself, so the caller stays in charge of `SELECT *` expansion,
/// aliasing, and ordinal positions.
pub trait ColumnEnumerator {
    fn columns(&self, tree: &SyntaxTree, query: QueryId) -> TypeResult<Vec<ProjectedColumn>>;
}

/// Enumerator that reads the projection list stored on the query node:
/// one column per projected item, alias as the exposed name. Callers that
/// expand `SELECT *` substitute their own implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstProjection;

impl ColumnEnumerator for AstProjection {
    fn columns(&self, tree: &SyntaxTree, query: QueryId) -> TypeResult<Vec<ProjectedColumn>> {
        tree.query(query)
            .projection
            .iter()
            .map(|&decl| match tree.decl(decl) {
                DeclNode::ProjectedItem { alias, expr } => Ok(ProjectedColumn {
                    name: alias.clone(),
                    expr: *expr,
                }),
                other => Err(TypeError::MalformedProjection {
                    found: other.kind_name(),
                }),
            })
            .collect()
    }
}

/// The type computation entry point.
///
/// Stateless across calls: every method is a pure function of the tree,
/// the node id, and the injected configuration. Computations over shared
/// trees may run from multiple threads as long as nothing mutates the
/// tree or the dialect meanwhile.
pub struct TypeComputer<'a> {
    dialect: &'a Dialect,
    columns: &'a dyn ColumnEnumerator,
}

impl<'a> TypeComputer<'a> {
    pub fn new(dialect: &'a Dialect, columns: &'a dyn ColumnEnumerator) -> Self {
        Self { dialect, columns }
    }

    /// Type of any typable node.
    pub fn type_of(&self, tree: &SyntaxTree, node: TypedNode) -> TypeResult<Option<TypeDescriptor>> {
        match node {
            TypedNode::Expr(expr) => self.type_of_expr(tree, expr),
            TypedNode::DataType(data_type) => Ok(Some(self.type_of_data_type(tree, data_type))),
        }
    }

    /// Type of an expression, dispatched by node kind.
    pub fn type_of_expr(&self, tree: &SyntaxTree, expr: ExprId) -> TypeResult<Option<TypeDescriptor>> {
        match tree.expr(expr) {
            ExprKind::Cast { operand, target } => {
                let Some(source) = self.type_of_expr(tree, *operand)? else {
                    return Ok(None);
                };
                let target = self.type_of_data_type(tree, *target);
                if self
                    .dialect
                    .conversions
                    .can_convert(&source, &target, ConversionMode::Explicit)
                {
                    Ok(Some(target))
                } else {
                    trace!("rejected cast from {source} to {target}");
                    Ok(None)
                }
            }
            ExprKind::NumberLiteral { lexeme } => classify_numeric_literal(lexeme).map(Some),
            ExprKind::NullLiteral => Ok(Some(TypeDescriptor::Null)),
            ExprKind::HexStringLiteral { .. } => Ok(Some(TypeDescriptor::Integer)),
            ExprKind::StringLiteral { .. } | ExprKind::IdentifierString { .. } => {
                Ok(Some(TypeDescriptor::char_any()))
            }
            ExprKind::BooleanLiteral { .. } => Ok(Some(TypeDescriptor::Boolean)),
            ExprKind::TableColumnRef { variable, column } => {
                self.type_of_table_column(tree, *variable, *column)
            }
            ExprKind::ColumnRef { target } => self.type_of_column_ref(tree, *target),
            ExprKind::ExprList { items } => self.type_of_list(tree, expr, items),
            ExprKind::Unary { op, operand } => {
                let Some(operand) = self.type_of_expr(tree, *operand)? else {
                    return Ok(None);
                };
                let resolved =
                    self.dialect
                        .operators
                        .resolve_unary(*op, &operand, &self.dialect.conversions);
                if resolved.is_none() {
                    trace!("unary {op} inapplicable to {operand}");
                }
                Ok(resolved)
            }
            ExprKind::Binary { op, left, right }
            | ExprKind::Negatable {
                op, left, right, ..
            } => {
                let left = self.type_of_expr(tree, *left)?;
                let right = self.type_of_expr(tree, *right)?;
                match (left, right) {
                    (Some(left), Some(right)) => {
                        let resolved = self.dialect.operators.resolve_binary(
                            *op,
                            &left,
                            &right,
                            &self.dialect.conversions,
                        );
                        if resolved.is_none() {
                            trace!("binary {op} inapplicable to ({left}, {right})");
                        }
                        Ok(resolved)
                    }
                    _ => Ok(None),
                }
            }
            ExprKind::Between { .. } => Ok(Some(TypeDescriptor::Boolean)),
            ExprKind::FunctionCall { function, .. } => match function {
                Some(decl) => match tree.decl(*decl) {
                    DeclNode::FunctionDef { return_type, .. } => {
                        Ok(Some(self.type_of_data_type(tree, *return_type)))
                    }
                    // A call link that resolved to something other than a
                    // function is ordinary inapplicability, not a defect.
                    _ => Ok(None),
                },
                None => Ok(None),
            },
            ExprKind::Subquery { query } => self.row_type_of(tree, *query),
        }
    }

    /// Row type of a query: the ordered (name, type) pairs of its visible
    /// projection. Absent if any projected expression has no type.
    pub fn row_type_of(&self, tree: &SyntaxTree, query: QueryId) -> TypeResult<Option<TypeDescriptor>> {
        let projected = self.columns.columns(tree, query)?;
        let mut columns = Vec::with_capacity(projected.len());
        for column in projected {
            let Some(ty) = self.type_of_expr(tree, column.expr)? else {
                trace!("projection column {:?} has no computable type", column.name);
                return Ok(None);
            };
            columns.push(RowColumn::new(column.name, ty));
        }
        Ok(Some(TypeDescriptor::Row { columns }))
    }

    /// Descriptor for a declared data type. Total over the closed kind
    /// set; the match has no default arm on purpose.
    pub fn type_of_data_type(&self, tree: &SyntaxTree, id: DataTypeId) -> TypeDescriptor {
        match tree.data_type(id) {
            DataTypeNode::Boolean => TypeDescriptor::Boolean,
            DataTypeNode::Integer => TypeDescriptor::Integer,
            DataTypeNode::Real => TypeDescriptor::Real,
            DataTypeNode::Char { length } => TypeDescriptor::Char { length: *length },
            DataTypeNode::Enum { members } => TypeDescriptor::Enum {
                members: members.clone(),
            },
            DataTypeNode::DateTime => TypeDescriptor::DateTime,
            DataTypeNode::Blob => TypeDescriptor::Blob,
        }
    }

    fn type_of_table_column(
        &self,
        tree: &SyntaxTree,
        variable: Option<DeclId>,
        column: Option<DeclId>,
    ) -> TypeResult<Option<TypeDescriptor>> {
        let Some(variable) = variable else {
            return Ok(None);
        };
        match tree.decl(variable) {
            DeclNode::TableSource { .. } => {
                let Some(column) = column else {
                    return Ok(None);
                };
                match tree.decl(column) {
                    DeclNode::ColumnDef { data_type, .. } => {
                        Ok(Some(self.type_of_data_type(tree, *data_type)))
                    }
                    _ => Ok(None),
                }
            }
            DeclNode::SubquerySource { .. } => {
                let Some(column) = column else {
                    return Ok(None);
                };
                match tree.decl(column) {
                    DeclNode::ProjectedItem { expr, .. } => self.type_of_expr(tree, *expr),
                    _ => Ok(None),
                }
            }
            // The binder only ever binds a qualifying variable to a row
            // source; anything else is a broken tree.
            other => Err(TypeError::UnexpectedReferent {
                context: "qualified column reference variable",
                found: other.kind_name(),
            }),
        }
    }

    fn type_of_column_ref(
        &self,
        tree: &SyntaxTree,
        target: Option<DeclId>,
    ) -> TypeResult<Option<TypeDescriptor>> {
        let Some(target) = target else {
            return Ok(None);
        };
        match tree.decl(target) {
            DeclNode::ProjectedItem { expr, .. } => self.type_of_expr(tree, *expr),
            DeclNode::ColumnDef { data_type, .. } => {
                Ok(Some(self.type_of_data_type(tree, *data_type)))
            }
            DeclNode::CteColumn { .. } => Err(TypeError::NotYetSupported {
                feature: "common table expression column references",
            }),
            other => Err(TypeError::UnexpectedReferent {
                context: "column reference",
                found: other.kind_name(),
            }),
        }
    }

    /// A list takes the type of its first element, except as the right
    /// operand of a membership test, where it is the set being tested
    /// against and becomes an array of that element type. The asymmetry
    /// is intentional: only `IN` may treat a list as a lookup.
    fn type_of_list(
        &self,
        tree: &SyntaxTree,
        list: ExprId,
        items: &[ExprId],
    ) -> TypeResult<Option<TypeDescriptor>> {
        let Some(&first) = items.first() else {
            return Ok(None);
        };
        let Some(first_type) = self.type_of_expr(tree, first)? else {
            return Ok(None);
        };
        if self.is_membership_operand(tree, list) {
            return Ok(Some(TypeDescriptor::array(first_type)));
        }
        Ok(Some(first_type))
    }

    fn is_membership_operand(&self, tree: &SyntaxTree, list: ExprId) -> bool {
        match tree.parent_of(list).map(|parent| tree.expr(parent)) {
            Some(ExprKind::Negatable {
                op: BinaryOperator::In,
                right,
                ..
            }) => *right == list,
            _ => false,
        }
    }
}
