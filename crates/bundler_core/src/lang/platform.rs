//! Platform type vocabulary.
//!
//! This registry lists the host platform's reference types the planner needs to know by name,
//! together with their direct supertypes. Front ends seed their type universe from it so that
//! assignability questions about `String`, the boxed wrappers, the list types and the marker
//! interfaces can be answered without the host compiler.
//!
//! ## Notes
//! - Names are fully qualified and matched **case-sensitively**.
//! - Supertypes are raw names. A supertype declaring as many type parameters as its subtype
//!   shares them in order (`ArrayList<E>` is a `List<E>`); others are used raw.
//! - `java.lang.Object` is implicit for every reference type and is therefore not listed as a
//!   supertype.
//!
//! ## Examples
//! ```rust
//! use bundler_core::lang::platform;
//!
//! let bundle = platform::lookup(platform::BUNDLE).unwrap();
//! assert!(bundle.supertypes.contains(&platform::PARCELABLE));
//! assert_eq!(platform::lookup(platform::ARRAY_LIST).unwrap().type_params, 1);
//! ```

pub const OBJECT: &str = "java.lang.Object";
pub const CLONEABLE: &str = "java.lang.Cloneable";
pub const SERIALIZABLE: &str = "java.io.Serializable";
pub const CHAR_SEQUENCE: &str = "java.lang.CharSequence";
pub const NUMBER: &str = "java.lang.Number";
pub const STRING: &str = "java.lang.String";
pub const BOOLEAN: &str = "java.lang.Boolean";
pub const BYTE: &str = "java.lang.Byte";
pub const SHORT: &str = "java.lang.Short";
pub const CHARACTER: &str = "java.lang.Character";
pub const INTEGER: &str = "java.lang.Integer";
pub const LONG: &str = "java.lang.Long";
pub const FLOAT: &str = "java.lang.Float";
pub const DOUBLE: &str = "java.lang.Double";
pub const COLLECTION: &str = "java.util.Collection";
pub const LIST: &str = "java.util.List";
pub const ARRAY_LIST: &str = "java.util.ArrayList";
pub const LINKED_LIST: &str = "java.util.LinkedList";
pub const MAP: &str = "java.util.Map";
pub const HASH_MAP: &str = "java.util.HashMap";
pub const PARCELABLE: &str = "android.os.Parcelable";
pub const BUNDLE: &str = "android.os.Bundle";
pub const SPARSE_ARRAY: &str = "android.util.SparseArray";

/// Metadata for a platform type.
#[derive(Debug, Clone, Copy)]
pub struct PlatformTypeInfo {
    pub qualified_name: &'static str,
    /// Direct supertypes (raw names).
    pub supertypes: &'static [&'static str],
    /// Number of type parameters the type declares.
    pub type_params: usize,
    pub description: &'static str,
}

/// Registry of platform types.
pub const PLATFORM_TYPES: &[PlatformTypeInfo] = &[
    info(OBJECT, &[], 0, "Root of the reference type hierarchy."),
    info(CLONEABLE, &[], 0, "Marker for types supporting field-wise copies."),
    info(SERIALIZABLE, &[], 0, "Marker for opaquely serializable types."),
    info(CHAR_SEQUENCE, &[], 0, "Readable sequence of characters."),
    info(NUMBER, &[SERIALIZABLE], 0, "Base of the boxed numeric types."),
    info(STRING, &[CHAR_SEQUENCE, SERIALIZABLE], 0, "Immutable text string."),
    info(BOOLEAN, &[SERIALIZABLE], 0, "Boxed boolean."),
    info(BYTE, &[NUMBER], 0, "Boxed byte."),
    info(SHORT, &[NUMBER], 0, "Boxed short."),
    info(CHARACTER, &[SERIALIZABLE], 0, "Boxed char."),
    info(INTEGER, &[NUMBER], 0, "Boxed int."),
    info(LONG, &[NUMBER], 0, "Boxed long."),
    info(FLOAT, &[NUMBER], 0, "Boxed float."),
    info(DOUBLE, &[NUMBER], 0, "Boxed double."),
    info(COLLECTION, &[], 1, "Group of elements."),
    info(LIST, &[COLLECTION], 1, "Ordered collection."),
    info(
        ARRAY_LIST,
        &[LIST, CLONEABLE, SERIALIZABLE],
        1,
        "Ordered, index-addressable list backed by an array.",
    ),
    info(
        LINKED_LIST,
        &[LIST, CLONEABLE, SERIALIZABLE],
        1,
        "Ordered list backed by linked nodes.",
    ),
    info(MAP, &[], 2, "Key/value map."),
    info(HASH_MAP, &[MAP, CLONEABLE, SERIALIZABLE], 2, "Hash-based key/value map."),
    info(PARCELABLE, &[], 0, "Marker for natively transferable types."),
    info(BUNDLE, &[PARCELABLE, CLONEABLE], 0, "Flat key/value container."),
    info(SPARSE_ARRAY, &[CLONEABLE], 1, "Integer-keyed sparse map."),
];

/// Look up a platform type by qualified name.
pub fn lookup(qualified_name: &str) -> Option<&'static PlatformTypeInfo> {
    PLATFORM_TYPES.iter().find(|t| t.qualified_name == qualified_name)
}

/// Check whether a qualified name belongs to the platform registry.
pub fn is_platform_type(qualified_name: &str) -> bool {
    lookup(qualified_name).is_some()
}

const fn info(
    qualified_name: &'static str,
    supertypes: &'static [&'static str],
    type_params: usize,
    description: &'static str,
) -> PlatformTypeInfo {
    PlatformTypeInfo {
        qualified_name,
        supertypes,
        type_params,
        description,
    }
}
