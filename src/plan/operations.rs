//! Type-to-operation resolution.
//!
//! [`TypeOperationResolver`] maps a field's declared type to the container operation used to
//! store and load it. Rules are tried in a fixed order and the first match wins:
//!
//! 1. exact catalog match (an array of a catalogued type gets the `Array` suffix)
//! 2. `ArrayList` of `String`, `Integer` or `CharSequence`
//! 3. `ArrayList` of a transferable element (or `? extends` one)
//! 4. `SparseArray` of a transferable element
//! 5. transferable type
//! 6. opaquely serializable type
//!
//! No match is not an error here; the caller reports it.
//!
//! ## Notes
//! - Rules 2-4 look at the type viewed as `ArrayList`/`SparseArray`, so a subclass binding the
//!   element in its `extends` clause (`class Items extends ArrayList<Item>`) is a list of `Item`.
//! - A raw list or sparse array converts unchecked to any element type: a raw `ArrayList` takes
//!   the first list rule (`StringArrayList`), a raw `SparseArray` is `SparseParcelableArray`.

use std::fmt;

use bundler_core::lang::conventions::ARRAY_SUFFIX;
use bundler_core::lang::operations::{self, OperationId};
use serde::{Serialize, Serializer};

use super::capabilities::{Capability, CapabilityCatalog};
use crate::frontend::types::TypeRef;

/// A container operation, optionally in its array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    id: OperationId,
    array: bool,
}

impl Operation {
    pub const fn scalar(id: OperationId) -> Self {
        Self { id, array: false }
    }

    pub const fn array(id: OperationId) -> Self {
        Self { id, array: true }
    }

    pub fn id(&self) -> OperationId {
        self.id
    }

    pub fn is_array(&self) -> bool {
        self.array
    }
}

/// `Int`, `IntArray`, `ParcelableArrayList`, ...
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(operations::as_str(self.id))?;
        if self.array {
            f.write_str(ARRAY_SUFFIX)?;
        }
        Ok(())
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The rule that produced an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    Catalog,
    HomogeneousList,
    TransferableList,
    SparseTransferable,
    Transferable,
    OpaqueSerializable,
}

impl fmt::Display for ResolutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResolutionRule::Catalog => "catalog",
            ResolutionRule::HomogeneousList => "homogeneous list",
            ResolutionRule::TransferableList => "transferable list",
            ResolutionRule::SparseTransferable => "sparse transferable",
            ResolutionRule::Transferable => "transferable",
            ResolutionRule::OpaqueSerializable => "opaque serializable",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub operation: Operation,
    pub rule: ResolutionRule,
}

impl Resolution {
    fn new(operation: Operation, rule: ResolutionRule) -> Self {
        Self { operation, rule }
    }
}

/// Pure mapping from declared types to operations over a prebuilt [`CapabilityCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct TypeOperationResolver<'c> {
    catalog: &'c CapabilityCatalog,
}

impl<'c> TypeOperationResolver<'c> {
    pub fn new(catalog: &'c CapabilityCatalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(&self, ty: &TypeRef) -> Option<Resolution> {
        self.catalog_match(ty)
            .or_else(|| self.homogeneous_list_match(ty))
            .or_else(|| self.transferable_list_match(ty))
            .or_else(|| self.sparse_transferable_match(ty))
            .or_else(|| self.transferable_match(ty))
            .or_else(|| self.opaque_serializable_match(ty))
    }

    fn catalog_match(&self, ty: &TypeRef) -> Option<Resolution> {
        let lookup = |t: &TypeRef| t.catalog_spelling().and_then(operations::catalog_lookup);
        let operation = match ty {
            TypeRef::Array(component) => Operation::array(lookup(component.as_ref())?),
            other => Operation::scalar(lookup(other)?),
        };
        Some(Resolution::new(operation, ResolutionRule::Catalog))
    }

    fn homogeneous_list_match(&self, ty: &TypeRef) -> Option<Resolution> {
        let view = self.catalog.container_view(ty, Capability::OrderedList)?;
        let id = match view.type_args() {
            [] => operations::HOMOGENEOUS_LISTS.first()?.operation,
            [TypeRef::Declared { name, args }] if args.is_empty() => {
                operations::homogeneous_list_for(name)?
            }
            _ => return None,
        };
        Some(Resolution::new(
            Operation::scalar(id),
            ResolutionRule::HomogeneousList,
        ))
    }

    fn transferable_list_match(&self, ty: &TypeRef) -> Option<Resolution> {
        self.holds_transferable(ty, Capability::OrderedList).then(|| {
            Resolution::new(
                Operation::scalar(OperationId::ParcelableArrayList),
                ResolutionRule::TransferableList,
            )
        })
    }

    fn sparse_transferable_match(&self, ty: &TypeRef) -> Option<Resolution> {
        self.holds_transferable(ty, Capability::SparseIndexed).then(|| {
            Resolution::new(
                Operation::scalar(OperationId::SparseParcelableArray),
                ResolutionRule::SparseTransferable,
            )
        })
    }

    fn transferable_match(&self, ty: &TypeRef) -> Option<Resolution> {
        self.catalog.has(ty, Capability::Transferable).then(|| {
            Resolution::new(
                Operation::scalar(OperationId::Parcelable),
                ResolutionRule::Transferable,
            )
        })
    }

    fn opaque_serializable_match(&self, ty: &TypeRef) -> Option<Resolution> {
        self.catalog.has(ty, Capability::OpaqueSerializable).then(|| {
            Resolution::new(
                Operation::scalar(OperationId::Serializable),
                ResolutionRule::OpaqueSerializable,
            )
        })
    }

    /// Whether `ty`, viewed as `container`, holds transferable elements. Raw views do.
    fn holds_transferable(&self, ty: &TypeRef, container: Capability) -> bool {
        match self.catalog.container_view(ty, container) {
            Some(view) => match view.type_args() {
                [] => true,
                [element] => self.catalog.has(element, Capability::Transferable),
                _ => false,
            },
            None => false,
        }
    }
}
