//! Declared-type model for action parameters
//!
//! The compiler never inspects live types. An adapter translates whatever the
//! host's reflection layer reports into a `TypeShape`, and classification
//! operates on that plain data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a parameter's declared type as reported by the metadata adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeShape {
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Char,
    String,
    DateTime,
    Duration,
    Uuid,

    /// An enumeration, by type name
    Enum(String),

    /// Nullable wrapper around another shape
    Optional(Box<TypeShape>),

    /// A user-defined value type exposing a deterministic parse-from-string
    /// convention, by type name
    Parseable(String),

    /// A single uploaded file
    File,

    /// A collection of uploaded files
    FileCollection,

    /// A structured type bound from the request payload, by type name
    Complex(String),

    /// A type the adapter could not describe; only an explicit binding
    /// override can resolve it
    Opaque(String),
}

impl TypeShape {
    /// Wrap a shape in a nullable wrapper
    pub fn optional(inner: TypeShape) -> Self {
        TypeShape::Optional(Box::new(inner))
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Bool => f.write_str("bool"),
            TypeShape::Int8 => f.write_str("i8"),
            TypeShape::UInt8 => f.write_str("u8"),
            TypeShape::Int16 => f.write_str("i16"),
            TypeShape::UInt16 => f.write_str("u16"),
            TypeShape::Int32 => f.write_str("i32"),
            TypeShape::UInt32 => f.write_str("u32"),
            TypeShape::Int64 => f.write_str("i64"),
            TypeShape::UInt64 => f.write_str("u64"),
            TypeShape::Float32 => f.write_str("f32"),
            TypeShape::Float64 => f.write_str("f64"),
            TypeShape::Decimal => f.write_str("decimal"),
            TypeShape::Char => f.write_str("char"),
            TypeShape::String => f.write_str("string"),
            TypeShape::DateTime => f.write_str("datetime"),
            TypeShape::Duration => f.write_str("duration"),
            TypeShape::Uuid => f.write_str("uuid"),
            TypeShape::Enum(name) => write!(f, "enum {}", name),
            TypeShape::Optional(inner) => write!(f, "{}?", inner),
            TypeShape::Parseable(name) => f.write_str(name),
            TypeShape::File => f.write_str("file"),
            TypeShape::FileCollection => f.write_str("file[]"),
            TypeShape::Complex(name) => f.write_str(name),
            TypeShape::Opaque(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_wraps() {
        let shape = TypeShape::optional(TypeShape::Int32);
        assert_eq!(shape, TypeShape::Optional(Box::new(TypeShape::Int32)));
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeShape::Int32.to_string(), "i32");
        assert_eq!(TypeShape::optional(TypeShape::Uuid).to_string(), "uuid?");
        assert_eq!(TypeShape::Complex("User".to_string()).to_string(), "User");
        assert_eq!(TypeShape::Enum("Color".to_string()).to_string(), "enum Color");
    }

    #[test]
    fn test_serde_round_trip() {
        let shape = TypeShape::optional(TypeShape::Complex("Order".to_string()));
        let json = serde_json::to_string(&shape).unwrap();
        let back: TypeShape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}
