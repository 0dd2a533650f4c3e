//! Parameter type classification
//!
//! Buckets a declared `TypeShape` into the four categories binding
//! resolution cares about. `Opaque` shapes do not classify; the compiler
//! rejects them unless an explicit binding override is present.

use dynapi_core::TypeShape;

/// Classification of a declared parameter type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Booleans, numeric widths, text, date/time, duration, identifiers,
    /// enumerations
    PrimitiveLike,
    /// A user-defined value type with a deterministic parse-from-string
    /// convention
    Parseable,
    /// An uploaded file or file collection
    File,
    /// Anything else; bound from the request payload
    Complex,
}

/// Classify a shape, unwrapping nullable wrappers.
///
/// Returns `None` for shapes the classifier cannot place.
pub fn classify(shape: &TypeShape) -> Option<TypeKind> {
    match shape {
        TypeShape::Bool
        | TypeShape::Int8
        | TypeShape::UInt8
        | TypeShape::Int16
        | TypeShape::UInt16
        | TypeShape::Int32
        | TypeShape::UInt32
        | TypeShape::Int64
        | TypeShape::UInt64
        | TypeShape::Float32
        | TypeShape::Float64
        | TypeShape::Decimal
        | TypeShape::Char
        | TypeShape::String
        | TypeShape::DateTime
        | TypeShape::Duration
        | TypeShape::Uuid
        | TypeShape::Enum(_) => Some(TypeKind::PrimitiveLike),
        TypeShape::Optional(inner) => classify(inner),
        TypeShape::Parseable(_) => Some(TypeKind::Parseable),
        TypeShape::File | TypeShape::FileCollection => Some(TypeKind::File),
        TypeShape::Complex(_) => Some(TypeKind::Complex),
        TypeShape::Opaque(_) => None,
    }
}

/// Whether a shape may appear as a path parameter
pub fn is_suitable_for_path(shape: &TypeShape) -> bool {
    matches!(
        classify(shape),
        Some(TypeKind::PrimitiveLike) | Some(TypeKind::Parseable)
    )
}

/// Whether a shape is bound from the request payload by default
pub fn is_body_candidate(shape: &TypeShape) -> bool {
    classify(shape) == Some(TypeKind::Complex)
}
