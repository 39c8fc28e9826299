//! Model descriptors.
//!
//! [`ModelDescriptor::parse`] walks one annotated declaration through
//! `Discovered → FieldsCollected → ConstructorResolved → Validated → Ready`. Any failure leaves
//! the model `Rejected` with the last completed [`Stage`] and at least one [`PlanError`]. A
//! `Ready` descriptor carries every field's operation and strategies, so turning it into a
//! [`GenerationPlan`] cannot fail.

use std::collections::HashMap;
use std::fmt;

use bundler_core::naming;
use serde::Serialize;
use tracing::debug;

use crate::frontend::symbols::{DeclKind, DeclarationView};

use super::accessors::{AccessorStrategyResolver, ReadStrategy, WriteMode, WriteStrategy};
use super::capabilities::CapabilityCatalog;
use super::config::PlannerConfig;
use super::constructor::ConstructorDescriptor;
use super::errors::{PlanError, Rejection};
use super::field::FieldDescriptor;
use super::operations::{Resolution, TypeOperationResolver};
use super::{FieldPlan, GenerationPlan};

/// Lifecycle stage of a model descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Discovered,
    FieldsCollected,
    ConstructorResolved,
    Validated,
    Ready,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Discovered => "discovery",
            Stage::FieldsCollected => "field collection",
            Stage::ConstructorResolved => "constructor resolution",
            Stage::Validated => "validation",
            Stage::Ready => "planning",
        })
    }
}

/// A field whose operation and strategies are all resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub descriptor: FieldDescriptor,
    pub resolution: Resolution,
    pub read: ReadStrategy,
    pub write: WriteStrategy,
}

/// A model that reached `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    qualified_name: String,
    package_name: String,
    companion_name: String,
    constructor: ConstructorDescriptor,
    write_mode: WriteMode,
    fields: Vec<ResolvedField>,
}

impl ModelDescriptor {
    /// Build and validate the descriptor for one annotated declaration.
    ///
    /// ## Errors
    /// A [`Rejection`] holding the first failure, or every failure when the config asks for
    /// [`AllFailures`](super::config::DiagnosticMode::AllFailures). Per field, the read strategy
    /// is checked before the write strategy, and both before the operation.
    #[tracing::instrument(skip_all, fields(model = declaration.qualified_name()))]
    pub fn parse<D: DeclarationView + ?Sized>(
        declaration: &D,
        catalog: &CapabilityCatalog,
        config: &PlannerConfig,
    ) -> Result<Self, Rejection> {
        let model = declaration.qualified_name().to_string();
        let reject = |stage: Stage, error: PlanError| Rejection::new(model.as_str(), stage, error);

        let kind = declaration.kind();
        if kind != DeclKind::Class {
            return Err(reject(
                Stage::Discovered,
                PlanError::InvalidAnnotationTarget {
                    model: model.clone(),
                    kind,
                },
            ));
        }

        let fields: Vec<FieldDescriptor> = declaration
            .enumerate_fields()
            .map_err(|e| reject(Stage::Discovered, PlanError::internal(e)))?
            .iter()
            .map(FieldDescriptor::parse)
            .collect();
        debug!(fields = fields.len(), "fields collected");

        let constructors = declaration
            .enumerate_constructors()
            .map_err(|e| reject(Stage::FieldsCollected, PlanError::internal(e)))?;
        let constructor = ConstructorDescriptor::resolve(&model, &constructors)
            .map_err(|e| reject(Stage::FieldsCollected, e))?;
        debug!(arity = constructor.arity(), "constructor resolved");

        let methods = declaration
            .enumerate_methods()
            .map_err(|e| reject(Stage::ConstructorResolved, PlanError::internal(e)))?;
        let write_mode =
            WriteMode::from_constructor_match(constructor.is_parameters_match_to_fields(&fields));
        let accessors = AccessorStrategyResolver::new(&methods, write_mode);
        let operations = TypeOperationResolver::new(catalog);

        let mut errors = Vec::new();
        let mut resolved = Vec::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            match resolve_field(field, position, &accessors, &operations) {
                Ok(field) => resolved.push(field),
                Err(field_errors) => {
                    errors.extend(field_errors);
                    if !config.collects_all_failures() {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() || config.collects_all_failures() {
            if config.check_key_collisions {
                errors.extend(key_collisions(&fields));
            }
            if write_mode == WriteMode::Mutation && !constructor.is_no_parameters() {
                errors.push(PlanError::MissingDefaultConstructor {
                    model: model.clone(),
                    arity: constructor.arity(),
                });
            }
        }

        if !config.collects_all_failures() {
            errors.truncate(1);
        }
        if let Some(rejection) =
            Rejection::from_vec(model.as_str(), Stage::ConstructorResolved, errors)
        {
            return Err(rejection);
        }
        debug!(%write_mode, "model validated");

        let descriptor = Self {
            package_name: declaration.package_name().to_string(),
            companion_name: naming::companion_name(declaration.simple_names()),
            qualified_name: model,
            constructor,
            write_mode,
            fields: resolved,
        };
        debug!(companion = %descriptor.companion_name, "model ready");
        Ok(descriptor)
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn companion_name(&self) -> &str {
        &self.companion_name
    }

    pub fn constructor(&self) -> &ConstructorDescriptor {
        &self.constructor
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    pub fn stage(&self) -> Stage {
        Stage::Ready
    }

    /// Hand the descriptor over to the emitter.
    pub fn into_plan(self) -> GenerationPlan {
        GenerationPlan {
            model: self.qualified_name,
            package: self.package_name,
            companion: self.companion_name,
            write_mode: self.write_mode,
            fields: self
                .fields
                .into_iter()
                .map(|resolved| FieldPlan {
                    container_key: resolved.descriptor.container_key(),
                    get_helper: resolved.descriptor.get_helper_name(),
                    put_helper: resolved.descriptor.put_helper_name(),
                    name: resolved.descriptor.name().to_string(),
                    declared_type: resolved.descriptor.declared_type().clone(),
                    operation: resolved.resolution.operation,
                    matched_by: resolved.resolution.rule,
                    read: resolved.read,
                    write: resolved.write,
                })
                .collect(),
        }
    }
}

/// Check one field: read strategy, write strategy, then operation.
///
/// All three are evaluated so that collecting every failure sees them together; callers that
/// stop at the first failure take the first entry.
fn resolve_field(
    field: &FieldDescriptor,
    position: usize,
    accessors: &AccessorStrategyResolver<'_>,
    operations: &TypeOperationResolver<'_>,
) -> Result<ResolvedField, Vec<PlanError>> {
    let read = accessors.read_strategy(field);
    let write = accessors.write_strategy(field, position);
    let resolution = field
        .operation(operations)
        .ok_or_else(|| PlanError::UnresolvableType {
            field: field.name().to_string(),
            ty: field.declared_type().clone(),
        });

    match (read, write, resolution) {
        (Ok(read), Ok(write), Ok(resolution)) => Ok(ResolvedField {
            descriptor: field.clone(),
            resolution,
            read,
            write,
        }),
        (read, write, resolution) => Err([read.err(), write.err(), resolution.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn key_collisions(fields: &[FieldDescriptor]) -> Vec<PlanError> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut errors = Vec::new();
    for field in fields {
        let key = field.container_key();
        match owners.get(&key) {
            Some(first) => errors.push(PlanError::DuplicateContainerKey {
                first: first.to_string(),
                second: field.name().to_string(),
                key,
            }),
            None => {
                owners.insert(key, field.name());
            }
        }
    }
    errors
}
