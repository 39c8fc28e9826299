//! Type hierarchy and assignability.
//!
//! [`TypeHierarchy`] records, per qualified name, the type parameters a type introduces and its
//! direct supertypes as written in its `extends`/`implements` clauses. It answers Java-style
//! assignment questions (no boxing, no unboxing).
//!
//! ## Notes
//! - `java.lang.Object` is a supertype of every reference type and never needs to be declared.
//! - Type arguments are carried up the supertype chain by substitution, so
//!   `ArrayList<Long>` is compared against `List<String>` as `List<Long>`.
//! - Arguments are invariant unless the target argument is a wildcard (`?`, `? extends U`).
//! - A raw source type (or a source whose argument count does not fit its declaration) is viewed
//!   through erased supertypes and is assignable to any parameterization of them (unchecked
//!   conversion).
//! - Arrays are assignable to `Object`, `Serializable` and `Cloneable`, and covariantly to arrays
//!   of reference supertypes.

use std::collections::{BTreeMap, HashSet};

use bundler_core::lang::platform::{self, CLONEABLE, OBJECT, SERIALIZABLE};

use super::types::TypeRef;

#[derive(Debug, Clone, Default)]
struct TypeNode {
    params: Vec<String>,
    supertypes: Vec<TypeRef>,
}

#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    nodes: BTreeMap<String, TypeNode>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A hierarchy seeded with every registered platform type.
    ///
    /// Platform type parameters are named `T0`, `T1`, ...; a supertype declaring as many
    /// parameters as its subtype receives them in order (`ArrayList<T0>` is a `List<T0>`).
    pub fn with_platform_types() -> Self {
        let mut hierarchy = Self::new();
        for info in platform::PLATFORM_TYPES {
            let params: Vec<String> = (0..info.type_params).map(|i| format!("T{i}")).collect();
            let supertypes = info.supertypes.iter().map(|sup| {
                let arity = platform::lookup(sup).map_or(0, |s| s.type_params);
                if arity > 0 && arity == params.len() {
                    TypeRef::parameterized(*sup, params.iter().cloned().map(TypeRef::Var).collect())
                } else {
                    TypeRef::declared(*sup)
                }
            });
            hierarchy.declare(info.qualified_name, params.clone(), supertypes);
        }
        hierarchy
    }

    /// Record a type, its type parameters and its direct supertypes.
    ///
    /// Declaring a known type again adds supertypes; its parameters are replaced only when new
    /// ones are given.
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        params: Vec<String>,
        supertypes: impl IntoIterator<Item = TypeRef>,
    ) {
        let node = self.nodes.entry(name.into()).or_default();
        if !params.is_empty() {
            node.params = params;
        }
        for sup in supertypes {
            if !node.supertypes.contains(&sup) {
                node.supertypes.push(sup);
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Known type names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn type_parameters(&self, name: &str) -> &[String] {
        self.nodes.get(name).map(|n| n.params.as_slice()).unwrap_or(&[])
    }

    pub fn direct_supertypes(&self, name: &str) -> &[TypeRef] {
        self.nodes
            .get(name)
            .map(|n| n.supertypes.as_slice())
            .unwrap_or(&[])
    }

    /// Reflexive, transitive subtype relation on raw names.
    pub fn is_subtype(&self, sub: &str, sup: &str) -> bool {
        sup == OBJECT || self.supertype_view(&TypeRef::declared(sub), sup).is_some()
    }

    /// `ty` viewed as its supertype named `target`, type arguments substituted along the way.
    ///
    /// Cycles in the declared supertypes terminate the walk instead of looping.
    pub fn supertype_view(&self, ty: &TypeRef, target: &str) -> Option<TypeRef> {
        let mut seen = HashSet::new();
        self.view_as(ty, target, &mut seen)
    }

    fn view_as<'h>(
        &'h self,
        ty: &TypeRef,
        target: &str,
        seen: &mut HashSet<&'h str>,
    ) -> Option<TypeRef> {
        let TypeRef::Declared { name, args } = ty else {
            return None;
        };
        if name == target {
            return Some(ty.clone());
        }
        let (key, node) = self.nodes.get_key_value(name.as_str())?;
        if !seen.insert(key.as_str()) {
            return None;
        }
        let parameterized = args.len() == node.params.len();
        let bindings: Vec<(String, TypeRef)> = if parameterized {
            node.params.iter().cloned().zip(args.iter().cloned()).collect()
        } else {
            Vec::new()
        };
        node.supertypes.iter().find_map(|sup| {
            let next = if parameterized {
                sup.substitute(&bindings)
            } else {
                sup.erasure()
            };
            self.view_as(&next, target, seen)
        })
    }

    pub fn is_assignable(&self, ty: &TypeRef, target: &TypeRef) -> bool {
        if ty == target {
            return true;
        }
        match (ty, target) {
            (TypeRef::Primitive(_), _) | (_, TypeRef::Primitive(_)) => false,
            (_, TypeRef::Declared { name, args }) if name == OBJECT && args.is_empty() => true,
            (TypeRef::Array(_), TypeRef::Declared { name, .. }) => {
                name == SERIALIZABLE || name == CLONEABLE
            }
            (TypeRef::Array(component), TypeRef::Array(target_component)) => {
                self.is_assignable(component, target_component)
            }
            (
                TypeRef::Declared { .. },
                TypeRef::Declared {
                    name: target_name,
                    args: target_args,
                },
            ) => {
                let Some(view) = self.supertype_view(ty, target_name) else {
                    return false;
                };
                let args = view.type_args();
                if target_args.is_empty() || args.is_empty() {
                    return true;
                }
                args.len() == target_args.len()
                    && args
                        .iter()
                        .zip(target_args)
                        .all(|(arg, target_arg)| self.contains_argument(arg, target_arg))
            }
            (TypeRef::Wildcard { upper: Some(upper) }, _) => self.is_assignable(upper, target),
            _ => false,
        }
    }

    /// Type-argument containment: `arg` fits in the slot of `target`.
    fn contains_argument(&self, arg: &TypeRef, target: &TypeRef) -> bool {
        match target {
            TypeRef::Wildcard { upper: None } => true,
            TypeRef::Wildcard { upper: Some(bound) } => match arg {
                TypeRef::Wildcard { upper: Some(arg_bound) } => {
                    self.is_assignable(arg_bound, bound)
                }
                TypeRef::Wildcard { upper: None } => {
                    matches!(bound.raw_name(), Some(OBJECT))
                }
                other => self.is_assignable(other, bound),
            },
            _ => arg == target,
        }
    }
}
