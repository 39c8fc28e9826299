//! Declaration manifests: a JSON stand-in for the host compiler's symbol table.
//!
//! A manifest lists type declarations with their fields, constructors, methods and supertypes.
//! [`ManifestUniverse`] loads one, seeds a [`TypeHierarchy`] with the platform types plus every
//! declared type, and implements [`TypeQueries`]; each [`TypeDecl`] implements
//! [`DeclarationView`].
//!
//! ## Notes
//! - `package` defaults to everything before the last `.` of `name`.
//! - A declaration without a `constructors` entry gets the implicit public no-arg constructor,
//!   while `"constructors": []` means "no constructors at all".
//! - Declaring a platform type again (e.g. to add supertypes) extends it.
//! - Supertypes keep their type arguments, which may name the declaration's own `type_params`.
//!
//! ## Examples
//! ```rust
//! use bundler::frontend::manifest::ManifestUniverse;
//!
//! let universe = ManifestUniverse::from_json_str(
//!     r#"{ "types": [{ "name": "com.example.Point", "annotated": true }] }"#,
//! )
//! .unwrap();
//! assert_eq!(universe.annotated().count(), 1);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use bundler_core::lang::platform::OBJECT;
use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

use super::hierarchy::TypeHierarchy;
use super::symbols::{
    ConstructorInfo, DeclKind, DeclarationView, FieldInfo, MethodInfo, SymbolError, TypeQueries,
};
use super::types::TypeRef;

/// Top-level manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// One declared type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub kind: DeclKind,
    /// Carries the generation annotation.
    #[serde(default)]
    pub annotated: bool,
    /// Type parameter names, e.g. `["K", "V"]` for `class Registry<K, V>`.
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Direct supertypes as written, e.g. `java.util.ArrayList<java.lang.String>`.
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    #[serde(default)]
    pub constructors: Option<Vec<ConstructorInfo>>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl DeclarationView for TypeDecl {
    fn qualified_name(&self) -> &str {
        &self.name
    }

    fn package_name(&self) -> &str {
        match &self.package {
            Some(package) => package.as_str(),
            None => self.name.rsplit_once('.').map(|(p, _)| p).unwrap_or(""),
        }
    }

    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn enumerate_fields(&self) -> Result<Vec<FieldInfo>, SymbolError> {
        Ok(self.fields.clone())
    }

    fn enumerate_constructors(&self) -> Result<Vec<ConstructorInfo>, SymbolError> {
        Ok(match &self.constructors {
            Some(declared) => declared.clone(),
            None if self.kind == DeclKind::Class => vec![ConstructorInfo::implicit_default()],
            None => Vec::new(),
        })
    }

    fn enumerate_methods(&self) -> Result<Vec<MethodInfo>, SymbolError> {
        Ok(self.methods.clone())
    }
}

/// Errors raised while loading a manifest.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read manifest `{}`", .path.display())]
    #[diagnostic(code(bundler::manifest::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    #[diagnostic(
        code(bundler::manifest::json),
        help("type strings use Java source spelling, e.g. `java.util.ArrayList<java.lang.String>`")
    )]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is declared more than once")]
    #[diagnostic(code(bundler::manifest::duplicate))]
    DuplicateDeclaration(String),
}

/// Every type known to one manifest, plus the platform types.
#[derive(Debug, Clone)]
pub struct ManifestUniverse {
    hierarchy: TypeHierarchy,
    declarations: Vec<TypeDecl>,
}

impl ManifestUniverse {
    pub fn from_manifest(manifest: Manifest) -> Result<Self, ManifestError> {
        let mut seen = HashSet::new();
        let mut hierarchy = TypeHierarchy::with_platform_types();
        for decl in &manifest.types {
            if !seen.insert(decl.name.as_str()) {
                return Err(ManifestError::DuplicateDeclaration(decl.name.clone()));
            }
            hierarchy.declare(
                decl.name.clone(),
                decl.type_params.clone(),
                decl.supertypes.iter().cloned(),
            );
        }
        tracing::debug!(
            declarations = manifest.types.len(),
            known_types = hierarchy.names().count(),
            "manifest loaded"
        );
        Ok(Self {
            hierarchy,
            declarations: manifest.types,
        })
    }

    pub fn from_json_str(source: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(source)?;
        Self::from_manifest(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn declarations(&self) -> &[TypeDecl] {
        &self.declarations
    }

    /// Declarations carrying the generation annotation, in manifest order.
    pub fn annotated(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations.iter().filter(|d| d.annotated)
    }

    pub fn declaration(&self, name: &str) -> Option<&TypeDecl> {
        self.declarations.iter().find(|d| d.name == name)
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }
}

impl TypeQueries for ManifestUniverse {
    fn is_assignable(&self, ty: &TypeRef, target: &TypeRef) -> bool {
        self.hierarchy.is_assignable(ty, target)
    }

    fn resolve_well_known_type(&self, qualified_name: &str) -> Result<TypeRef, SymbolError> {
        if qualified_name == OBJECT || self.hierarchy.contains(qualified_name) {
            Ok(TypeRef::declared(qualified_name))
        } else {
            Err(SymbolError::UnknownWellKnownType(qualified_name.to_string()))
        }
    }

    fn declared_types(&self) -> Vec<String> {
        self.hierarchy.names().map(str::to_string).collect()
    }

    fn type_parameters(&self, qualified_name: &str) -> Vec<String> {
        self.hierarchy.type_parameters(qualified_name).to_vec()
    }

    fn supertype_view(&self, ty: &TypeRef, target: &str) -> Option<TypeRef> {
        self.hierarchy.supertype_view(ty, target)
    }
}
