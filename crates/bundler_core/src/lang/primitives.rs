//! Primitive type vocabulary.
//!
//! This registry covers the eight primitive kinds of the host language, their source keywords and
//! the qualified names of their boxed counterparts.
//!
//! ## Notes
//! - Lookup via [`from_keyword`] and [`from_boxed`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata), not assignability semantics.
//!
//! ## Examples
//! ```rust
//! use bundler_core::lang::primitives::{self, PrimitiveId};
//!
//! assert_eq!(primitives::from_keyword("int"), Some(PrimitiveId::Int));
//! assert_eq!(primitives::from_boxed("java.lang.Character"), Some(PrimitiveId::Char));
//! assert_eq!(primitives::boxed_name(PrimitiveId::Long), "java.lang.Long");
//! ```

/// Stable identifier for primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveId {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

/// Metadata for a primitive kind.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    pub id: PrimitiveId,
    /// Source keyword (`int`).
    pub keyword: &'static str,
    /// Qualified name of the boxed counterpart (`java.lang.Integer`).
    pub boxed: &'static str,
    pub description: &'static str,
}

/// Registry of primitive kinds.
pub const PRIMITIVES: &[PrimitiveInfo] = &[
    info(PrimitiveId::Boolean, "boolean", "java.lang.Boolean", "Truth value."),
    info(PrimitiveId::Byte, "byte", "java.lang.Byte", "Signed 8-bit integer."),
    info(PrimitiveId::Short, "short", "java.lang.Short", "Signed 16-bit integer."),
    info(PrimitiveId::Char, "char", "java.lang.Character", "UTF-16 code unit."),
    info(PrimitiveId::Int, "int", "java.lang.Integer", "Signed 32-bit integer."),
    info(PrimitiveId::Long, "long", "java.lang.Long", "Signed 64-bit integer."),
    info(PrimitiveId::Float, "float", "java.lang.Float", "32-bit IEEE 754 float."),
    info(PrimitiveId::Double, "double", "java.lang.Double", "64-bit IEEE 754 float."),
];

/// Resolve a source keyword to a [`PrimitiveId`].
///
/// ## Returns
/// - `Some(PrimitiveId)` if `keyword` is one of the eight primitive keywords.
/// - `None` otherwise (including boxed names).
pub fn from_keyword(keyword: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.keyword == keyword).map(|p| p.id)
}

/// Resolve a boxed qualified name (`java.lang.Integer`) to the primitive it wraps.
pub fn from_boxed(qualified_name: &str) -> Option<PrimitiveId> {
    PRIMITIVES.iter().find(|p| p.boxed == qualified_name).map(|p| p.id)
}

/// Return the source keyword for a primitive kind.
pub fn as_str(id: PrimitiveId) -> &'static str {
    info_for(id).keyword
}

/// Return the qualified name of the boxed counterpart.
pub fn boxed_name(id: PrimitiveId) -> &'static str {
    info_for(id).boxed
}

/// Return the full metadata entry for a primitive kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveId) -> &'static PrimitiveInfo {
    PRIMITIVES
        .iter()
        .find(|p| p.id == id)
        .expect("primitive info missing")
}

const fn info(id: PrimitiveId, keyword: &'static str, boxed: &'static str, description: &'static str) -> PrimitiveInfo {
    PrimitiveInfo {
        id,
        keyword,
        boxed,
        description,
    }
}
