//! Dialect configuration container

use crate::{ConversionTable, OperatorRegistry};

/// A dialect's type rules: which conversions hold and which operator
/// signatures exist.
///
/// Supplied at `TypeComputer` construction and treated as immutable from
/// then on; several dialects can coexist in one process and be tested
/// independently.
#[derive(Debug, Clone, Default)]
pub struct Dialect {
    pub conversions: ConversionTable,
    pub operators: OperatorRegistry,
}

impl Dialect {
    pub fn new(conversions: ConversionTable, operators: OperatorRegistry) -> Self {
        Self {
            conversions,
            operators,
        }
    }
}
