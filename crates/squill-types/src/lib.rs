//! squill type system
//!
//! Static type inference for a name-resolved SQL syntax tree:
//! - `TypeDescriptor` — the structurally-compared value-type model
//! - `ConversionTable` — dialect-supplied implicit/explicit conversion rules
//! - `OperatorRegistry` — dialect-supplied operator signature tables
//! - numeric literal classification (Integer vs Real)
//! - `TypeComputer` — the recursive orchestrator over expression and
//!   data-type nodes, including row types for subqueries
//!
//! The engine is pure: it never mutates the tree, carries no state across
//! calls, and reports ordinary ill-typed input as an absent type rather
//! than an error.

mod compute;
mod conversion;
mod descriptor;
mod dialect;
mod error;
mod literal;
mod operators;

pub use compute::*;
pub use conversion::*;
pub use descriptor::*;
pub use dialect::*;
pub use error::*;
pub use literal::*;
pub use operators::*;
