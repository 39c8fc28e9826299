//! Read and write strategies for model fields.
//!
//! The generated companion reads a field directly when it is public and otherwise through its
//! conventional getter. Writes depend on the model-wide [`WriteMode`]: every field goes through
//! the constructor, or each field is assigned directly or through its conventional setter.
//!
//! ## Notes
//! - Accessors must be non-private and non-static; the companion lives in the model's package.
//! - A getter takes no arguments and returns exactly the declared type. A setter takes exactly
//!   one argument of the declared type; its return type is not checked.
//! - Methods that share the conventional name but not the shape are ignored.

use std::fmt;

use serde::Serialize;

use crate::frontend::symbols::MethodInfo;
use crate::frontend::types::TypeRef;

use super::errors::PlanError;
use super::field::FieldDescriptor;

/// How the companion reads a field from a model instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadStrategy {
    Field,
    Getter { method: String },
}

/// How the companion writes a field when rebuilding a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WriteStrategy {
    /// Passed to the constructor at `position`.
    Constructor { position: usize },
    Field,
    Setter { method: String },
}

/// Model-wide choice between constructor injection and per-field mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    Constructor,
    Mutation,
}

impl WriteMode {
    pub fn from_constructor_match(matches_fields: bool) -> Self {
        if matches_fields {
            WriteMode::Constructor
        } else {
            WriteMode::Mutation
        }
    }
}

impl fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadStrategy::Field => f.write_str("field"),
            ReadStrategy::Getter { method } => write!(f, "{method}()"),
        }
    }
}

impl fmt::Display for WriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteStrategy::Constructor { position } => write!(f, "constructor arg {position}"),
            WriteStrategy::Field => f.write_str("field"),
            WriteStrategy::Setter { method } => write!(f, "{method}(..)"),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteMode::Constructor => "constructor",
            WriteMode::Mutation => "mutation",
        })
    }
}

/// Decides read/write strategies against one model's methods.
#[derive(Debug, Clone, Copy)]
pub struct AccessorStrategyResolver<'m> {
    methods: &'m [MethodInfo],
    write_mode: WriteMode,
}

impl<'m> AccessorStrategyResolver<'m> {
    pub fn new(methods: &'m [MethodInfo], write_mode: WriteMode) -> Self {
        Self {
            methods,
            write_mode,
        }
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn read_strategy(&self, field: &FieldDescriptor) -> Result<ReadStrategy, PlanError> {
        if field.is_public() {
            return Ok(ReadStrategy::Field);
        }
        let getter = field.getter_name();
        if self
            .methods
            .iter()
            .any(|m| is_getter_for(m, &getter, field.declared_type()))
        {
            return Ok(ReadStrategy::Getter { method: getter });
        }
        Err(PlanError::UnresolvableReadStrategy {
            field: field.name().to_string(),
            getter,
        })
    }

    /// ## Parameters
    /// - `position`: the field's index in declaration order (its constructor argument slot).
    pub fn write_strategy(
        &self,
        field: &FieldDescriptor,
        position: usize,
    ) -> Result<WriteStrategy, PlanError> {
        if self.write_mode == WriteMode::Constructor {
            return Ok(WriteStrategy::Constructor { position });
        }
        if field.is_public() {
            return Ok(WriteStrategy::Field);
        }
        let setter = field.setter_name();
        if self
            .methods
            .iter()
            .any(|m| is_setter_for(m, &setter, field.declared_type()))
        {
            return Ok(WriteStrategy::Setter { method: setter });
        }
        Err(PlanError::UnresolvableWriteStrategy {
            field: field.name().to_string(),
            setter,
        })
    }
}

fn is_usable(method: &MethodInfo, name: &str) -> bool {
    method.name == name && !method.is_static && method.visibility.is_accessible_to_companion()
}

fn is_getter_for(method: &MethodInfo, name: &str, ty: &TypeRef) -> bool {
    is_usable(method, name) && method.params.is_empty() && method.returns.as_ref() == Some(ty)
}

fn is_setter_for(method: &MethodInfo, name: &str, ty: &TypeRef) -> bool {
    is_usable(method, name) && matches!(method.params.as_slice(), [only] if &only.ty == ty)
}
