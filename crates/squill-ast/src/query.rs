//! Query nodes

use crate::DeclId;

/// A `SELECT` query as seen by the type engine: its visible projection,
/// in source order.
///
/// Each entry links to a `ProjectedItem` declaration. Order is
/// significant — column position is a valid addressing mode for `SELECT *`
/// expansion and ordinal references downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryNode {
    pub projection: Vec<DeclId>,
}

impl QueryNode {
    pub fn new(projection: Vec<DeclId>) -> Self {
        Self { projection }
    }
}
