//! Name-resolved SQL syntax tree definitions
//!
//! This crate defines the tree the squill type engine consumes: expression
//! nodes, data-type nodes, declaration nodes, and query nodes, stored in an
//! arena (`SyntaxTree`) and addressed by typed index ids. Reference-bearing
//! nodes carry `Option<DeclId>` links filled in by the upstream binder;
//! a missing link means the binder could not resolve the name.
//!
//! The tree is produced elsewhere (parser + binder) and is read-only for
//! the type engine.

mod data_type;
mod decl;
mod expression;
mod operator;
mod query;
mod tree;

pub use data_type::*;
pub use decl::*;
pub use expression::*;
pub use operator::*;
pub use query::*;
pub use tree::*;
