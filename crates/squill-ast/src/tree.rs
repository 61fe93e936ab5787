//! Arena storage for the resolved syntax tree

use smallvec::SmallVec;

use crate::{DataTypeNode, DeclNode, ExprKind, QueryNode};

macro_rules! node_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize);
                Self(index as u32)
            }

            /// Index into the owning arena.
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

node_id! {
    /// Id of an expression node
    ExprId
}
node_id! {
    /// Id of a data-type node
    DataTypeId
}
node_id! {
    /// Id of a declaration node
    DeclId
}
node_id! {
    /// Id of a query node
    QueryId
}

/// The resolved syntax tree of one statement.
///
/// Nodes live in per-kind arenas and refer to each other by id, so a
/// declaration can be the target of many reference links without any
/// ownership cycles. Build the tree bottom-up with the `add_*` methods;
/// child ids passed to a composite node must already exist in this tree.
///
/// Parent links between expressions are recorded as nodes are added. The
/// type engine needs them for exactly one rule: a parenthesized list is
/// typed as an array only when it is the right operand of a membership
/// test.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    exprs: Vec<ExprKind>,
    expr_parents: Vec<Option<ExprId>>,
    data_types: Vec<DataTypeNode>,
    decls: Vec<DeclNode>,
    queries: Vec<QueryNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expression node, recording it as the parent of its children.
    pub fn add_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(self.exprs.len());
        for child in child_exprs(&kind) {
            self.expr_parents[child.index()] = Some(id);
        }
        self.exprs.push(kind);
        self.expr_parents.push(None);
        id
    }

    pub fn add_data_type(&mut self, node: DataTypeNode) -> DataTypeId {
        let id = DataTypeId::new(self.data_types.len());
        self.data_types.push(node);
        id
    }

    pub fn add_decl(&mut self, node: DeclNode) -> DeclId {
        let id = DeclId::new(self.decls.len());
        self.decls.push(node);
        id
    }

    pub fn add_query(&mut self, node: QueryNode) -> QueryId {
        let id = QueryId::new(self.queries.len());
        self.queries.push(node);
        id
    }

    pub fn expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    /// The expression directly enclosing `id`, if any.
    pub fn parent_of(&self, id: ExprId) -> Option<ExprId> {
        self.expr_parents[id.index()]
    }

    pub fn data_type(&self, id: DataTypeId) -> &DataTypeNode {
        &self.data_types[id.index()]
    }

    pub fn decl(&self, id: DeclId) -> &DeclNode {
        &self.decls[id.index()]
    }

    pub fn query(&self, id: QueryId) -> &QueryNode {
        &self.queries[id.index()]
    }
}

/// Direct child expressions of a node, in source order.
fn child_exprs(kind: &ExprKind) -> SmallVec<[ExprId; 3]> {
    let mut children = SmallVec::new();
    match kind {
        ExprKind::Cast { operand, .. } | ExprKind::Unary { operand, .. } => {
            children.push(*operand);
        }
        ExprKind::Binary { left, right, .. } | ExprKind::Negatable { left, right, .. } => {
            children.push(*left);
            children.push(*right);
        }
        ExprKind::Between { operand, low, high } => {
            children.push(*operand);
            children.push(*low);
            children.push(*high);
        }
        ExprKind::ExprList { items } => children.extend(items.iter().copied()),
        ExprKind::FunctionCall { args, .. } => children.extend(args.iter().copied()),
        ExprKind::NumberLiteral { .. }
        | ExprKind::NullLiteral
        | ExprKind::HexStringLiteral { .. }
        | ExprKind::StringLiteral { .. }
        | ExprKind::IdentifierString { .. }
        | ExprKind::BooleanLiteral { .. }
        | ExprKind::TableColumnRef { .. }
        | ExprKind::ColumnRef { .. }
        | ExprKind::Subquery { .. } => {}
    }
    children
}
