//! Field descriptors and the names derived from them.

use bundler_core::naming;

use crate::frontend::symbols::{FieldInfo, Visibility};
use crate::frontend::types::TypeRef;

use super::operations::{Resolution, TypeOperationResolver};

/// One non-static field of a model, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    declared_type: TypeRef,
    visibility: Visibility,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: TypeRef, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            declared_type,
            visibility,
        }
    }

    pub fn parse(info: &FieldInfo) -> Self {
        Self::new(info.name.clone(), info.ty.clone(), info.visibility)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &TypeRef {
        &self.declared_type
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility.is_public()
    }

    /// `ARG_` + UPPER_UNDERSCORE(name)
    pub fn container_key(&self) -> String {
        naming::container_key(&self.name)
    }

    pub fn getter_name(&self) -> String {
        naming::getter_name(&self.name)
    }

    pub fn setter_name(&self) -> String {
        naming::setter_name(&self.name)
    }

    pub fn get_helper_name(&self) -> String {
        naming::get_helper_name(&self.name)
    }

    pub fn put_helper_name(&self) -> String {
        naming::put_helper_name(&self.name)
    }

    pub fn operation(&self, resolver: &TypeOperationResolver<'_>) -> Option<Resolution> {
        resolver.resolve(&self.declared_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_names() {
        let field = FieldDescriptor::new(
            "userName",
            TypeRef::declared("java.lang.String"),
            Visibility::Private,
        );
        assert_eq!(field.container_key(), "ARG_USER_NAME");
        assert_eq!(field.getter_name(), "getUserName");
        assert_eq!(field.setter_name(), "setUserName");
        assert_eq!(field.get_helper_name(), "getUserName");
        assert_eq!(field.put_helper_name(), "putUserName");
        assert!(!field.is_public());
    }

    #[test]
    fn test_parse_copies_declaration() {
        let info = FieldInfo {
            name: "x".to_string(),
            ty: "int".parse().unwrap(),
            visibility: Visibility::Public,
        };
        let field = FieldDescriptor::parse(&info);
        assert_eq!(field.name(), "x");
        assert_eq!(field.declared_type().to_string(), "int");
        assert!(field.is_public());
        assert_eq!(field.container_key(), "ARG_X");
    }
}
