//! Container operation vocabulary.
//!
//! An operation names the `put<Op>`/`get<Op>` method pair of the container that a field's value is
//! stored with. This registry holds every operation the planner can select, the exact-match
//! catalog consulted first during resolution, and the three homogeneous list element types.
//!
//! ## Notes
//! - Lookup via [`from_str`], [`catalog_lookup`] and [`homogeneous_list_for`] is **case-sensitive**.
//! - The catalog is keyed by *spelling*: primitive keywords (`int`) and qualified names
//!   (`java.lang.Integer`). Both map to the same operation.
//! - Array forms are not separate operations: a field of type `T[]` with `T` in the catalog uses
//!   the catalog operation with [`ARRAY_SUFFIX`](crate::lang::conventions::ARRAY_SUFFIX) appended.
//!
//! ## Examples
//! ```rust
//! use bundler_core::lang::operations::{self, OperationId};
//!
//! assert_eq!(operations::catalog_lookup("int"), Some(OperationId::Int));
//! assert_eq!(operations::catalog_lookup("java.util.ArrayList"), None);
//! assert_eq!(
//!     operations::homogeneous_list_for("java.lang.CharSequence"),
//!     Some(OperationId::CharSequenceArrayList)
//! );
//! assert_eq!(operations::from_str("Serializable"), Some(OperationId::Serializable));
//! ```

use crate::lang::platform;

/// Stable identifier for container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationId {
    String,
    Int,
    Long,
    Double,
    Short,
    Float,
    Byte,
    Boolean,
    Char,
    CharSequence,
    Bundle,
    Parcelable,
    StringArrayList,
    IntegerArrayList,
    CharSequenceArrayList,
    ParcelableArrayList,
    SparseParcelableArray,
    Serializable,
}

/// Metadata for a container operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub id: OperationId,
    /// Spelling used in the generated `put<Op>`/`get<Op>` calls.
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of container operations.
pub const OPERATIONS: &[OperationInfo] = &[
    info(OperationId::String, "String", "Text string."),
    info(OperationId::Int, "Int", "32-bit integer, primitive or boxed."),
    info(OperationId::Long, "Long", "64-bit integer, primitive or boxed."),
    info(OperationId::Double, "Double", "64-bit float, primitive or boxed."),
    info(OperationId::Short, "Short", "16-bit integer, primitive or boxed."),
    info(OperationId::Float, "Float", "32-bit float, primitive or boxed."),
    info(OperationId::Byte, "Byte", "8-bit integer, primitive or boxed."),
    info(OperationId::Boolean, "Boolean", "Truth value, primitive or boxed."),
    info(OperationId::Char, "Char", "UTF-16 code unit, primitive or boxed."),
    info(OperationId::CharSequence, "CharSequence", "Any character sequence."),
    info(OperationId::Bundle, "Bundle", "A nested container."),
    info(OperationId::Parcelable, "Parcelable", "A single transferable object."),
    info(
        OperationId::StringArrayList,
        "StringArrayList",
        "Ordered list of text strings.",
    ),
    info(
        OperationId::IntegerArrayList,
        "IntegerArrayList",
        "Ordered list of boxed integers.",
    ),
    info(
        OperationId::CharSequenceArrayList,
        "CharSequenceArrayList",
        "Ordered list of character sequences.",
    ),
    info(
        OperationId::ParcelableArrayList,
        "ParcelableArrayList",
        "Ordered list of transferable objects.",
    ),
    info(
        OperationId::SparseParcelableArray,
        "SparseParcelableArray",
        "Integer-indexed sparse map of transferable objects.",
    ),
    info(
        OperationId::Serializable,
        "Serializable",
        "Opaque, type-erased serialization fallback.",
    ),
];

/// One exact-match catalog row: a type spelling and the operation it selects.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub type_name: &'static str,
    pub operation: OperationId,
}

/// Exact-match catalog consulted before any structural rule.
pub const CATALOG: &[CatalogEntry] = &[
    entry(platform::STRING, OperationId::String),
    entry("int", OperationId::Int),
    entry(platform::INTEGER, OperationId::Int),
    entry("long", OperationId::Long),
    entry(platform::LONG, OperationId::Long),
    entry("double", OperationId::Double),
    entry(platform::DOUBLE, OperationId::Double),
    entry("short", OperationId::Short),
    entry(platform::SHORT, OperationId::Short),
    entry("float", OperationId::Float),
    entry(platform::FLOAT, OperationId::Float),
    entry("byte", OperationId::Byte),
    entry(platform::BYTE, OperationId::Byte),
    entry("boolean", OperationId::Boolean),
    entry(platform::BOOLEAN, OperationId::Boolean),
    entry("char", OperationId::Char),
    entry(platform::CHARACTER, OperationId::Char),
    entry(platform::CHAR_SEQUENCE, OperationId::CharSequence),
    entry(platform::BUNDLE, OperationId::Bundle),
    entry(platform::PARCELABLE, OperationId::Parcelable),
];

/// Element types that have a dedicated homogeneous list operation, in resolution order.
pub const HOMOGENEOUS_LISTS: &[CatalogEntry] = &[
    entry(platform::STRING, OperationId::StringArrayList),
    entry(platform::INTEGER, OperationId::IntegerArrayList),
    entry(platform::CHAR_SEQUENCE, OperationId::CharSequenceArrayList),
];

/// Resolve an operation spelling to an [`OperationId`].
pub fn from_str(name: &str) -> Option<OperationId> {
    OPERATIONS.iter().find(|o| o.canonical == name).map(|o| o.id)
}

/// Look up the exact-match catalog.
///
/// ## Parameters
/// - `type_name`: primitive keyword or qualified reference type name, without type arguments.
///
/// ## Returns
/// - `Some(OperationId)` if the spelling is catalogued.
/// - `None` otherwise.
pub fn catalog_lookup(type_name: &str) -> Option<OperationId> {
    CATALOG
        .iter()
        .find(|e| e.type_name == type_name)
        .map(|e| e.operation)
}

/// Look up the homogeneous list operation for an exact element type.
pub fn homogeneous_list_for(element_type: &str) -> Option<OperationId> {
    HOMOGENEOUS_LISTS
        .iter()
        .find(|e| e.type_name == element_type)
        .map(|e| e.operation)
}

/// Return the canonical spelling for an operation.
pub fn as_str(id: OperationId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operation.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperationId) -> &'static OperationInfo {
    OPERATIONS
        .iter()
        .find(|o| o.id == id)
        .expect("operation info missing")
}

const fn info(id: OperationId, canonical: &'static str, description: &'static str) -> OperationInfo {
    OperationInfo {
        id,
        canonical,
        description,
    }
}

const fn entry(type_name: &'static str, operation: OperationId) -> CatalogEntry {
    CatalogEntry { type_name, operation }
}
