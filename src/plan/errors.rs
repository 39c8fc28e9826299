//! Planning errors.
//!
//! Every way a model can be rejected is a [`PlanError`] variant. A rejected model produces a
//! [`Rejection`] carrying the stage it reached and at least one error; the CLI renders it through
//! miette, with each error attached as a related diagnostic.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use super::model::Stage;
use crate::frontend::symbols::DeclKind;
use crate::frontend::types::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum PlanError {
    #[error("`{model}` is an {kind}; generation targets classes only")]
    #[diagnostic(
        code(bundler::invalid_annotation_target),
        help("move the annotation to a class declaration")
    )]
    InvalidAnnotationTarget { model: String, kind: DeclKind },

    #[error("`{model}` must declare exactly one public or protected constructor, found {found}")]
    #[diagnostic(
        code(bundler::constructor_count),
        help("make all but one constructor private or package-private")
    )]
    ConstructorCount { model: String, found: usize },

    #[error("field `{field}` of type `{ty}` has no container operation")]
    #[diagnostic(
        code(bundler::unresolvable_type),
        help(
            "use a primitive, a boxed primitive, String, CharSequence, Bundle, a Parcelable or \
             Serializable type, or an ArrayList/SparseArray of Parcelable elements"
        )
    )]
    UnresolvableType { field: String, ty: TypeRef },

    #[error("field `{field}` is not public and has no `{getter}()` returning its declared type")]
    #[diagnostic(
        code(bundler::unresolvable_read_strategy),
        help("make the field public or add a non-private, no-argument getter")
    )]
    UnresolvableReadStrategy { field: String, getter: String },

    #[error("field `{field}` is not public and has no `{setter}(..)` taking its declared type")]
    #[diagnostic(
        code(bundler::unresolvable_write_strategy),
        help(
            "make the field public, add a non-private one-argument setter, or declare a \
             constructor whose parameters match the fields in order"
        )
    )]
    UnresolvableWriteStrategy { field: String, setter: String },

    #[error("fields `{first}` and `{second}` both map to container key `{key}`")]
    #[diagnostic(
        code(bundler::duplicate_container_key),
        help("rename one of the fields")
    )]
    DuplicateContainerKey {
        key: String,
        first: String,
        second: String,
    },

    #[error(
        "`{model}` is written field by field but its constructor takes {arity} parameter(s)"
    )]
    #[diagnostic(
        code(bundler::missing_default_constructor),
        help(
            "declare a no-argument constructor, or match the constructor parameters to the \
             fields by name, type and order"
        )
    )]
    MissingDefaultConstructor { model: String, arity: usize },

    #[error("internal error: {message}")]
    #[diagnostic(code(bundler::internal))]
    Internal { message: String },
}

impl PlanError {
    pub fn internal(err: impl fmt::Display) -> Self {
        PlanError::Internal {
            message: err.to_string(),
        }
    }

    /// Short, stable name of the error kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PlanError::InvalidAnnotationTarget { .. } => "invalid_annotation_target",
            PlanError::ConstructorCount { .. } => "constructor_count",
            PlanError::UnresolvableType { .. } => "unresolvable_type",
            PlanError::UnresolvableReadStrategy { .. } => "unresolvable_read_strategy",
            PlanError::UnresolvableWriteStrategy { .. } => "unresolvable_write_strategy",
            PlanError::DuplicateContainerKey { .. } => "duplicate_container_key",
            PlanError::MissingDefaultConstructor { .. } => "missing_default_constructor",
            PlanError::Internal { .. } => "internal",
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, PlanError::Internal { .. })
    }
}

/// A model that was rejected, with every error collected for it.
///
/// The error list is never empty; both constructors enforce it and it is not exposed mutably.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot generate a companion for `{model}` (rejected after {stage})")]
#[diagnostic(code(bundler::rejected))]
pub struct Rejection {
    pub model: String,
    /// Last stage the model completed before failing.
    pub stage: Stage,
    #[related]
    errors: Vec<PlanError>,
}

impl Rejection {
    pub fn new(model: impl Into<String>, stage: Stage, first: PlanError) -> Self {
        Self {
            model: model.into(),
            stage,
            errors: vec![first],
        }
    }

    /// Build a rejection from collected errors; `None` when there is nothing to report.
    pub fn from_vec(model: impl Into<String>, stage: Stage, errors: Vec<PlanError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self {
                model: model.into(),
                stage,
                errors,
            })
        }
    }

    pub fn first(&self) -> &PlanError {
        &self.errors[0]
    }

    pub fn errors(&self) -> &[PlanError] {
        &self.errors
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_internal_error(&self) -> bool {
        self.errors.iter().any(PlanError::is_internal)
    }
}
