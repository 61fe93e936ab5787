//! Conversion rule engine
//!
//! Decides whether a value of one type may stand in for another, either
//! implicitly (automatic) or explicitly (cast required). The engine itself
//! knows nothing about any particular dialect: it evaluates a rule table
//! supplied as configuration data. Structural equality always converts;
//! every implicit rule also satisfies an explicit request, never the
//! reverse.

use serde::{Deserialize, Serialize};

use crate::{TypeDescriptor, TypeKind};

/// Whether a conversion happens automatically or needs a cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionMode {
    /// Automatic coercion, usable in operator and assignment matching
    Implicit,
    /// Permitted only through an explicit cast construct
    Explicit,
}

/// Matches a set of type descriptors on one side of a conversion rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeMatcher {
    /// Matches every type
    Any,
    /// Matches every descriptor with the given discriminator, e.g. any
    /// `Char` regardless of declared length
    Kind(TypeKind),
    /// Matches one descriptor, structurally
    Exactly(TypeDescriptor),
}

impl TypeMatcher {
    pub fn matches(&self, ty: &TypeDescriptor) -> bool {
        match self {
            Self::Any => true,
            Self::Kind(kind) => ty.kind() == *kind,
            Self::Exactly(expected) => ty == expected,
        }
    }
}

/// One dialect-supplied conversion rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRule {
    pub source: TypeMatcher,
    pub target: TypeMatcher,
    pub mode: ConversionMode,
}

impl ConversionRule {
    pub fn implicit(source: TypeMatcher, target: TypeMatcher) -> Self {
        Self {
            source,
            target,
            mode: ConversionMode::Implicit,
        }
    }

    pub fn explicit(source: TypeMatcher, target: TypeMatcher) -> Self {
        Self {
            source,
            target,
            mode: ConversionMode::Explicit,
        }
    }
}

/// The dialect's conversion relation, queried but never computed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionTable {
    rules: Vec<ConversionRule>,
}

impl ConversionTable {
    pub fn new(rules: Vec<ConversionRule>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: ConversionRule) {
        self.rules.push(rule);
    }

    /// Whether `source` may stand in for `target` under `mode`.
    ///
    /// Equal types convert trivially in both modes. Otherwise a rule must
    /// cover the pair; an implicit rule satisfies both modes, an explicit
    /// rule only an explicit request. No rule means `false`, never an
    /// error.
    pub fn can_convert(
        &self,
        source: &TypeDescriptor,
        target: &TypeDescriptor,
        mode: ConversionMode,
    ) -> bool {
        if source == target {
            return true;
        }
        self.rules.iter().any(|rule| {
            rule.source.matches(source)
                && rule.target.matches(target)
                && (rule.mode == ConversionMode::Implicit || mode == ConversionMode::Explicit)
        })
    }
}
