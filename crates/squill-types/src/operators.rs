//! Operator resolution tables
//!
//! Each operator maps to an ordered list of candidate signatures. A lookup
//! scans the list once; for every candidate it tries an exact structural
//! match first, then an implicit-conversion match, and the first candidate
//! satisfying either wins.
//!
//! The exact check runs before the implicit check *within the same
//! candidate*, not as a separate pass over the whole table. An exact
//! signature is therefore never widened away by its own looser twin, but a
//! later candidate's exact match can still lose to an earlier candidate's
//! implicit match. Dialect tables depend on this scan order; do not turn
//! it into a global exact-first pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use squill_ast::{BinaryOperator, UnaryOperator};

use crate::{ConversionMode, ConversionTable, TypeDescriptor};

/// Candidate signature of a binary operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySignature {
    pub left: TypeDescriptor,
    pub right: TypeDescriptor,
    pub result: TypeDescriptor,
}

impl BinarySignature {
    pub fn new(left: TypeDescriptor, right: TypeDescriptor, result: TypeDescriptor) -> Self {
        Self {
            left,
            right,
            result,
        }
    }
}

/// Candidate signature of a unary operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnarySignature {
    pub operand: TypeDescriptor,
    pub result: TypeDescriptor,
}

impl UnarySignature {
    pub fn new(operand: TypeDescriptor, result: TypeDescriptor) -> Self {
        Self { operand, result }
    }
}

/// Per-operator candidate tables, in resolution order.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    binary: HashMap<BinaryOperator, Vec<BinarySignature>>,
    unary: HashMap<UnaryOperator, Vec<UnarySignature>>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binary candidate; registration order is resolution order.
    pub fn register_binary(&mut self, op: BinaryOperator, signature: BinarySignature) {
        self.binary.entry(op).or_default().push(signature);
    }

    /// Append a unary candidate; registration order is resolution order.
    pub fn register_unary(&mut self, op: UnaryOperator, signature: UnarySignature) {
        self.unary.entry(op).or_default().push(signature);
    }

    /// Resolve a binary application to its result type, or `None` if the
    /// operator is inapplicable to these operand types.
    pub fn resolve_binary(
        &self,
        op: BinaryOperator,
        left: &TypeDescriptor,
        right: &TypeDescriptor,
        conversions: &ConversionTable,
    ) -> Option<TypeDescriptor> {
        let candidates = self.binary.get(&op)?;
        for candidate in candidates {
            if candidate.left == *left && candidate.right == *right {
                return Some(candidate.result.clone());
            }
            if conversions.can_convert(left, &candidate.left, ConversionMode::Implicit)
                && conversions.can_convert(right, &candidate.right, ConversionMode::Implicit)
            {
                return Some(candidate.result.clone());
            }
        }
        None
    }

    /// Resolve a unary application to its result type, or `None`.
    pub fn resolve_unary(
        &self,
        op: UnaryOperator,
        operand: &TypeDescriptor,
        conversions: &ConversionTable,
    ) -> Option<TypeDescriptor> {
        let candidates = self.unary.get(&op)?;
        for candidate in candidates {
            if candidate.operand == *operand {
                return Some(candidate.result.clone());
            }
            if conversions.can_convert(operand, &candidate.operand, ConversionMode::Implicit) {
                return Some(candidate.result.clone());
            }
        }
        None
    }
}
