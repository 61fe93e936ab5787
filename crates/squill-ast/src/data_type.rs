//! Data-type declaration nodes

/// A declared data type, as written in DDL or a cast target.
///
/// Closed set, matched exhaustively by the type engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTypeNode {
    /// `BOOLEAN`
    Boolean,
    /// `INTEGER`
    Integer,
    /// `REAL`
    Real,
    /// `CHAR` / `CHAR(n)`
    Char { length: Option<u32> },
    /// `ENUM(a, b, c)` with members in declaration order
    Enum { members: Vec<String> },
    /// `DATETIME`
    DateTime,
    /// `BLOB`
    Blob,
}
