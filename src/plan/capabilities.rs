//! Capability tags for declared types.
//!
//! The operation rules only care about four properties of a type: can it be transferred
//! natively, can it be serialized opaquely, is it an ordered list, is it a sparse indexed
//! collection. [`CapabilityCatalog::build`] asks the host once per declared type and caches the
//! answers, so resolution afterwards is pure pattern matching over [`TypeRef`].
//!
//! ## Notes
//! - Capabilities of a parameterized type are those of its raw type.
//! - List and sparse types also keep their container view, so `class Names extends
//!   ArrayList<String>` is known to hold `String` elements.
//! - Every array is opaquely serializable; primitives and type variables have no capabilities.
//! - A bounded wildcard has the capabilities of its bound.

use std::collections::HashMap;

use bundler_core::lang::platform;

use crate::frontend::symbols::{SymbolError, TypeQueries};
use crate::frontend::types::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Natively transferable through the container (`Parcelable`).
    Transferable,
    /// Transferable as an opaque serialized blob (`Serializable`).
    OpaqueSerializable,
    /// `ArrayList` or a subtype of it.
    OrderedList,
    /// `SparseArray` or a subtype of it.
    SparseIndexed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub transferable: bool,
    pub opaque_serializable: bool,
    pub ordered_list: bool,
    pub sparse_indexed: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        transferable: false,
        opaque_serializable: false,
        ordered_list: false,
        sparse_indexed: false,
    };

    pub fn has(self, capability: Capability) -> bool {
        match capability {
            Capability::Transferable => self.transferable,
            Capability::OpaqueSerializable => self.opaque_serializable,
            Capability::OrderedList => self.ordered_list,
            Capability::SparseIndexed => self.sparse_indexed,
        }
    }
}

/// What the catalog knows about one declared type.
#[derive(Debug, Clone, Default)]
struct TypeEntry {
    capabilities: Capabilities,
    params: Vec<String>,
    /// The type's generic form viewed as `ArrayList`, e.g. `ArrayList<T>` or `ArrayList<String>`.
    list_view: Option<TypeRef>,
    /// The type's generic form viewed as `SparseArray`.
    sparse_view: Option<TypeRef>,
}

/// Capabilities of every declared type known to the host.
#[derive(Debug, Clone, Default)]
pub struct CapabilityCatalog {
    entries: HashMap<String, TypeEntry>,
}

impl CapabilityCatalog {
    /// Classify every declared type once.
    ///
    /// ## Errors
    /// Fails when the host cannot resolve one of the platform marker types.
    #[tracing::instrument(skip_all)]
    pub fn build(types: &dyn TypeQueries) -> Result<Self, SymbolError> {
        let transferable = types.resolve_well_known_type(platform::PARCELABLE)?;
        let serializable = types.resolve_well_known_type(platform::SERIALIZABLE)?;
        types.resolve_well_known_type(platform::ARRAY_LIST)?;
        types.resolve_well_known_type(platform::SPARSE_ARRAY)?;

        let mut entries = HashMap::new();
        for name in types.declared_types() {
            let params = types.type_parameters(&name);
            let generic = TypeRef::parameterized(
                name.as_str(),
                params.iter().cloned().map(TypeRef::Var).collect(),
            );
            let list_view = types.supertype_view(&generic, platform::ARRAY_LIST);
            let sparse_view = types.supertype_view(&generic, platform::SPARSE_ARRAY);
            let capabilities = Capabilities {
                transferable: types.is_assignable(&generic, &transferable),
                opaque_serializable: types.is_assignable(&generic, &serializable),
                ordered_list: list_view.is_some(),
                sparse_indexed: sparse_view.is_some(),
            };
            entries.insert(
                name,
                TypeEntry {
                    capabilities,
                    params,
                    list_view,
                    sparse_view,
                },
            );
        }
        tracing::debug!(types = entries.len(), "capability catalog built");
        Ok(Self { entries })
    }

    pub fn capabilities_of(&self, ty: &TypeRef) -> Capabilities {
        match ty {
            TypeRef::Primitive(_) | TypeRef::Var(_) | TypeRef::Wildcard { upper: None } => {
                Capabilities::NONE
            }
            TypeRef::Declared { name, .. } => self
                .entries
                .get(name)
                .map(|entry| entry.capabilities)
                .unwrap_or_default(),
            TypeRef::Array(_) => Capabilities {
                opaque_serializable: true,
                ..Capabilities::NONE
            },
            TypeRef::Wildcard { upper: Some(upper) } => self.capabilities_of(upper),
        }
    }

    pub fn has(&self, ty: &TypeRef, capability: Capability) -> bool {
        self.capabilities_of(ty).has(capability)
    }

    /// A declared type viewed as the container behind `container` (`ArrayList` for
    /// [`Capability::OrderedList`], `SparseArray` for [`Capability::SparseIndexed`]), its own type
    /// arguments substituted in. A raw use of a generic type yields the raw container.
    ///
    /// `None` for other capabilities and for types that are not such a container.
    pub fn container_view(&self, ty: &TypeRef, container: Capability) -> Option<TypeRef> {
        let TypeRef::Declared { name, args } = ty else {
            return None;
        };
        let entry = self.entries.get(name)?;
        let view = match container {
            Capability::OrderedList => entry.list_view.as_ref()?,
            Capability::SparseIndexed => entry.sparse_view.as_ref()?,
            Capability::Transferable | Capability::OpaqueSerializable => return None,
        };
        if args.len() != entry.params.len() {
            return Some(view.erasure());
        }
        let bindings: Vec<(String, TypeRef)> =
            entry.params.iter().cloned().zip(args.iter().cloned()).collect();
        Some(view.substitute(&bindings))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
