//! Companion planning
//!
//! This module decides, for every field of an annotated model, which container operation
//! transfers it and how the generated companion reads and writes it:
//! - `capabilities`: per-type capability tags computed once from the host
//! - `operations`: ordered type-to-operation rules
//! - `field` / `constructor`: descriptors built from declarations
//! - `accessors`: read/write strategy selection
//! - `model`: the per-model state machine producing [`GenerationPlan`]s
//! - `errors`: rejection reasons
//! - `config`: planner options

pub mod accessors;
pub mod capabilities;
pub mod config;
pub mod constructor;
pub mod errors;
pub mod field;
pub mod model;
pub mod operations;


use serde::Serialize;

use crate::frontend::types::TypeRef;

pub use accessors::{ReadStrategy, WriteMode, WriteStrategy};
pub use config::{DiagnosticMode, PlannerConfig};
pub use errors::{PlanError, Rejection};
pub use model::{ModelDescriptor, Stage};
pub use operations::{Operation, ResolutionRule};

/// Everything an emitter needs to generate one companion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    /// Qualified name of the model.
    pub model: String,
    pub package: String,
    /// Simple name of the companion type.
    pub companion: String,
    pub write_mode: WriteMode,
    /// In declaration order.
    pub fields: Vec<FieldPlan>,
}

impl GenerationPlan {
    /// Qualified name of the companion type.
    pub fn companion_qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.companion.clone()
        } else {
            format!("{}.{}", self.package, self.companion)
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldPlan> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    pub name: String,
    pub container_key: String,
    pub declared_type: TypeRef,
    pub operation: Operation,
    pub matched_by: ResolutionRule,
    pub read: ReadStrategy,
    pub write: WriteStrategy,
    /// Companion helper returning the field from a container.
    pub get_helper: String,
    /// Companion helper storing the field into a container.
    pub put_helper: String,
}
