//! Symbol table views consumed by the planner.
//!
//! The planner never talks to a compiler directly. It sees declarations through
//! [`DeclarationView`] and asks type questions through [`TypeQueries`]; any front end able to
//! answer both (the JSON manifest in [`crate::frontend::manifest`], an annotation-processing
//! host, a test double) can drive it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::TypeRef;

/// Declared visibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    /// No modifier: visible within the declaring package.
    #[default]
    #[serde(alias = "package-private")]
    Package,
    Private,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }

    /// Constructors are considered only when public or protected.
    pub fn is_constructor_eligible(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }

    /// The companion is generated into the model's package, so anything but `private` is
    /// reachable from it.
    pub fn is_accessible_to_companion(self) -> bool {
        !matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Package => "package-private",
            Visibility::Private => "private",
        })
    }
}

/// What kind of type a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Enum => "enum",
            DeclKind::Annotation => "annotation",
        })
    }
}

/// A field as declared (non-static fields only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub visibility: Visibility,
}

/// A named, typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamInfo>,
    /// `None` for `void`.
    #[serde(default)]
    pub returns: Option<TypeRef>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
    #[serde(default)]
    pub params: Vec<ParamInfo>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl ConstructorInfo {
    /// The constructor a class gets when it declares none.
    pub fn implicit_default() -> Self {
        Self {
            params: Vec::new(),
            visibility: Visibility::Public,
        }
    }
}

/// A symbol-table query that could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("declaration `{0}` is not known to the symbol table")]
    UnknownDeclaration(String),
    #[error("well-known type `{0}` cannot be resolved")]
    UnknownWellKnownType(String),
    #[error("symbol table query failed: {0}")]
    Query(String),
}

/// Read-only view of one type declaration.
///
/// Enumeration order is declaration order; the planner relies on it for positional constructor
/// matching and for the order of the emitted field plans.
pub trait DeclarationView {
    fn qualified_name(&self) -> &str;

    fn package_name(&self) -> &str;

    fn kind(&self) -> DeclKind;

    /// Non-static fields, in declaration order.
    fn enumerate_fields(&self) -> Result<Vec<FieldInfo>, SymbolError>;

    fn enumerate_constructors(&self) -> Result<Vec<ConstructorInfo>, SymbolError>;

    fn enumerate_methods(&self) -> Result<Vec<MethodInfo>, SymbolError>;

    /// Simple names from the outermost enclosing type down to this one.
    ///
    /// ## Examples
    /// `com.example.SampleActivity.Params` in package `com.example` yields
    /// `["SampleActivity", "Params"]`.
    fn simple_names(&self) -> Vec<&str> {
        let name = self.qualified_name();
        let package = self.package_name();
        let local = if package.is_empty() {
            name
        } else {
            name.strip_prefix(package)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(name)
        };
        local.split('.').collect()
    }
}

/// Type questions the planner asks the host.
pub trait TypeQueries {
    /// Whether a value of `ty` can be assigned to a variable of `target`.
    fn is_assignable(&self, ty: &TypeRef, target: &TypeRef) -> bool;

    /// Resolve a platform type by qualified name.
    fn resolve_well_known_type(&self, qualified_name: &str) -> Result<TypeRef, SymbolError>;

    /// Qualified names of every declared (class or interface) type known to the host.
    fn declared_types(&self) -> Vec<String>;

    /// Type parameter names a declared type introduces, in declaration order.
    fn type_parameters(&self, qualified_name: &str) -> Vec<String>;

    /// `ty` viewed as its supertype `target` (a raw qualified name), with type arguments carried
    /// through every `extends` clause on the way. `class Names extends ArrayList<String>` viewed
    /// as `java.util.ArrayList` is `java.util.ArrayList<java.lang.String>`.
    ///
    /// A raw `ty` yields a raw view. `None` when `target` is not a supertype of `ty`.
    fn supertype_view(&self, ty: &TypeRef, target: &str) -> Option<TypeRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, &'static str);

    impl DeclarationView for Named {
        fn qualified_name(&self) -> &str {
            self.0
        }
        fn package_name(&self) -> &str {
            self.1
        }
        fn kind(&self) -> DeclKind {
            DeclKind::Class
        }
        fn enumerate_fields(&self) -> Result<Vec<FieldInfo>, SymbolError> {
            Ok(Vec::new())
        }
        fn enumerate_constructors(&self) -> Result<Vec<ConstructorInfo>, SymbolError> {
            Ok(Vec::new())
        }
        fn enumerate_methods(&self) -> Result<Vec<MethodInfo>, SymbolError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_simple_names_strip_package() {
        let nested = Named("com.example.SampleActivity.Params", "com.example");
        assert_eq!(nested.simple_names(), vec!["SampleActivity", "Params"]);

        let top = Named("com.example.Point", "com.example");
        assert_eq!(top.simple_names(), vec!["Point"]);
    }

    #[test]
    fn test_simple_names_default_package() {
        assert_eq!(Named("Point", "").simple_names(), vec!["Point"]);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(Visibility::Protected.is_constructor_eligible());
        assert!(!Visibility::Package.is_constructor_eligible());
        assert!(Visibility::Package.is_accessible_to_companion());
        assert!(!Visibility::Private.is_accessible_to_companion());
        assert_eq!(Visibility::default(), Visibility::Package);
    }

    #[test]
    fn test_method_info_defaults_from_json() {
        let method: MethodInfo = serde_json::from_str(r#"{ "name": "reset" }"#).unwrap();
        assert!(method.params.is_empty());
        assert_eq!(method.returns, None);
        assert_eq!(method.visibility, Visibility::Package);
        assert!(!method.is_static);
    }
}
