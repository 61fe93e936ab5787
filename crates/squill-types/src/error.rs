//! Type engine errors
//!
//! Ordinary ill-typed or unresolved input is never an error here — it
//! surfaces as an absent type (`Ok(None)`). These variants cover the two
//! loud failure tiers: defects in the input tree's own contract, and
//! recognized-but-unimplemented constructs.

use thiserror::Error;

/// Result alias for type engine operations.
pub type TypeResult<T> = Result<T, TypeError>;

/// A contract violation or deferred feature hit during type computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A resolved reference points at a declaration kind the upstream
    /// binder can never produce in this position.
    #[error("internal defect: {context} resolved to a {found}, which cannot occur in a well-formed tree")]
    UnexpectedReferent {
        context: &'static str,
        found: &'static str,
    },

    /// A numeric literal lexeme the lexer should have rejected upstream.
    #[error("internal defect: malformed numeric literal lexeme {lexeme:?}")]
    MalformedNumericLiteral { lexeme: String },

    /// A projection entry that is not a projected item.
    #[error("internal defect: query projection entry is a {found}")]
    MalformedProjection { found: &'static str },

    /// A recognized construct the engine does not implement yet.
    #[error("{feature} are not yet supported")]
    NotYetSupported { feature: &'static str },
}

impl TypeError {
    /// Whether this signals an internal-consistency defect, as opposed to
    /// a known feature gap.
    pub const fn is_internal(&self) -> bool {
        !matches!(self, Self::NotYetSupported { .. })
    }
}
