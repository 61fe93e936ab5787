//! Type descriptors
//!
//! A `TypeDescriptor` is an immutable value object describing the static
//! type of an expression, column, or data-type declaration. Descriptors
//! are compared structurally — derived equality is the sole mechanism by
//! which operator and conversion lookups match types; there is no
//! subtyping beyond what the conversion table expresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of value types known to the engine.
///
/// `Null` is its own bottom-like tag, not a flavor of any other type; the
/// dialect's conversion table decides what it may stand in for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypeDescriptor {
    /// Boolean
    Boolean,
    /// Integer
    Integer,
    /// Real (floating point)
    Real,
    /// Character string, with optional declared length
    Char { length: Option<u32> },
    /// Enumeration; member order is part of the type
    Enum { members: Vec<String> },
    /// Date and time
    DateTime,
    /// Binary large object
    Blob,
    /// The type of the `NULL` literal
    Null,
    /// Homogeneous array, the type of an `IN` list
    Array(Box<TypeDescriptor>),
    /// Ordered, optionally named columns — the shape of a query
    Row { columns: Vec<RowColumn> },
}

impl TypeDescriptor {
    /// `CHAR(length)`
    pub const fn char_of(length: u32) -> Self {
        Self::Char {
            length: Some(length),
        }
    }

    /// `CHAR` with unspecified length, the type of string literals
    pub const fn char_any() -> Self {
        Self::Char { length: None }
    }

    /// Enumeration over the given members, in order
    pub fn enum_of<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    /// Array of the given element type
    pub fn array(element: TypeDescriptor) -> Self {
        Self::Array(Box::new(element))
    }

    /// Row over the given columns, in order
    pub fn row(columns: Vec<RowColumn>) -> Self {
        Self::Row { columns }
    }

    /// The bare discriminator of this descriptor.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Boolean => TypeKind::Boolean,
            Self::Integer => TypeKind::Integer,
            Self::Real => TypeKind::Real,
            Self::Char { .. } => TypeKind::Char,
            Self::Enum { .. } => TypeKind::Enum,
            Self::DateTime => TypeKind::DateTime,
            Self::Blob => TypeKind::Blob,
            Self::Null => TypeKind::Null,
            Self::Array(_) => TypeKind::Array,
            Self::Row { .. } => TypeKind::Row,
        }
    }

    /// Check if this is a numeric type
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Real)
    }

    /// Element type for arrays
    pub fn element_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Columns for row types
    pub fn columns(&self) -> Option<&[RowColumn]> {
        match self {
            Self::Row { columns } => Some(columns),
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Integer => f.write_str("INTEGER"),
            Self::Real => f.write_str("REAL"),
            Self::Char { length: Some(n) } => write!(f, "CHAR({n})"),
            Self::Char { length: None } => f.write_str("CHAR"),
            Self::Enum { members } => write!(f, "ENUM({})", members.join(", ")),
            Self::DateTime => f.write_str("DATETIME"),
            Self::Blob => f.write_str("BLOB"),
            Self::Null => f.write_str("NULL"),
            Self::Array(element) => write!(f, "ARRAY<{element}>"),
            Self::Row { columns } => {
                f.write_str("ROW(")?;
                for (i, column) in columns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match &column.name {
                        Some(name) => write!(f, "{name} {}", column.ty)?,
                        None => write!(f, "{}", column.ty)?,
                    }
                }
                f.write_str(")")
            }
        }
    }
}

/// One column of a row type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowColumn {
    /// Column name, if the projection exposes one
    pub name: Option<String>,
    /// Column type
    pub ty: TypeDescriptor,
}

impl RowColumn {
    pub fn new(name: Option<String>, ty: TypeDescriptor) -> Self {
        Self { name, ty }
    }

    /// Named column
    pub fn named(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }
}

/// Bare type discriminator, used by conversion-rule matchers to state
/// rules like "any Char converts to any Char".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    Boolean,
    Integer,
    Real,
    Char,
    Enum,
    DateTime,
    Blob,
    Null,
    Array,
    Row,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Char => "CHAR",
            Self::Enum => "ENUM",
            Self::DateTime => "DATETIME",
            Self::Blob => "BLOB",
            Self::Null => "NULL",
            Self::Array => "ARRAY",
            Self::Row => "ROW",
        };
        f.write_str(name)
    }
}
