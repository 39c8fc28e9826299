//! The model's single eligible constructor.

use crate::frontend::symbols::{ConstructorInfo, ParamInfo, Visibility};

use super::errors::PlanError;
use super::field::FieldDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    parameters: Vec<ParamInfo>,
    visibility: Visibility,
}

impl ConstructorDescriptor {
    pub fn parse(info: &ConstructorInfo) -> Self {
        Self {
            parameters: info.params.clone(),
            visibility: info.visibility,
        }
    }

    /// Select the model's constructor: exactly one public or protected constructor must exist.
    ///
    /// ## Errors
    /// `ConstructorCount` when zero or several constructors are eligible.
    pub fn resolve(model: &str, constructors: &[ConstructorInfo]) -> Result<Self, PlanError> {
        let eligible: Vec<&ConstructorInfo> = constructors
            .iter()
            .filter(|c| c.visibility.is_constructor_eligible())
            .collect();
        match eligible.as_slice() {
            [only] => Ok(Self::parse(only)),
            _ => Err(PlanError::ConstructorCount {
                model: model.to_string(),
                found: eligible.len(),
            }),
        }
    }

    pub fn parameters(&self) -> &[ParamInfo] {
        &self.parameters
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_no_parameters(&self) -> bool {
        self.parameters.is_empty()
    }

    /// True when parameter *i* has the name and exact type of field *i*, for every *i*, and the
    /// counts agree.
    pub fn is_parameters_match_to_fields(&self, fields: &[FieldDescriptor]) -> bool {
        self.parameters.len() == fields.len()
            && self
                .parameters
                .iter()
                .zip(fields)
                .all(|(param, field)| {
                    param.name == field.name() && &param.ty == field.declared_type()
                })
    }
}
