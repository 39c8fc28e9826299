//! Semantic type descriptions for declared fields, parameters and return values.
//!
//! [`TypeRef`] is the planner's view of a host-language type. It is produced by the front end
//! (here: parsed from the Java source spelling used in declaration manifests) and compared
//! structurally everywhere else.
//!
//! ## Notes
//! - Declared types are identified by their **qualified name**; type arguments are kept in order.
//! - An undotted name without type arguments is a primitive keyword (`int`), a type variable when
//!   it is a single uppercase letter optionally followed by digits (`T`, `E2`), and a declared type
//!   otherwise.
//! - Only `?` and `? extends U` wildcards exist; `? super U` is rejected by the parser.
//!
//! ## Examples
//! ```rust
//! use bundler::frontend::types::TypeRef;
//!
//! let ty: TypeRef = "java.util.ArrayList<java.lang.String>".parse().unwrap();
//! assert_eq!(ty.raw_name(), Some("java.util.ArrayList"));
//! assert_eq!(ty.to_string(), "java.util.ArrayList<java.lang.String>");
//! ```

use std::fmt;
use std::str::FromStr;

use bundler_core::lang::primitives::{self, PrimitiveId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A host-language type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// One of the eight primitive kinds.
    Primitive(PrimitiveId),
    /// A class or interface type, possibly parameterized.
    Declared { name: String, args: Vec<TypeRef> },
    /// `T[]`
    Array(Box<TypeRef>),
    /// `?` or `? extends U`; only meaningful as a type argument.
    Wildcard { upper: Option<Box<TypeRef>> },
    /// A type variable such as `T`.
    Var(String),
}

impl TypeRef {
    pub fn primitive(id: PrimitiveId) -> Self {
        TypeRef::Primitive(id)
    }

    /// A non-parameterized declared type.
    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn parameterized(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args,
        }
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    pub fn wildcard_extends(upper: TypeRef) -> Self {
        TypeRef::Wildcard {
            upper: Some(Box::new(upper)),
        }
    }

    /// Qualified name of a declared type, ignoring its type arguments.
    pub fn raw_name(&self) -> Option<&str> {
        match self {
            TypeRef::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Type arguments of a declared type (empty for everything else).
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Declared { args, .. } => args,
            _ => &[],
        }
    }

    /// The single type argument of a declared type with exactly one argument.
    pub fn single_type_arg(&self) -> Option<&TypeRef> {
        match self.type_args() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// Replace type variables bound in `bindings`; unbound variables are kept.
    pub fn substitute(&self, bindings: &[(String, TypeRef)]) -> TypeRef {
        match self {
            TypeRef::Var(name) => bindings
                .iter()
                .find(|(var, _)| var == name)
                .map(|(_, bound)| bound.clone())
                .unwrap_or_else(|| self.clone()),
            TypeRef::Declared { name, args } => TypeRef::Declared {
                name: name.clone(),
                args: args.iter().map(|arg| arg.substitute(bindings)).collect(),
            },
            TypeRef::Array(component) => TypeRef::array_of(component.substitute(bindings)),
            TypeRef::Wildcard { upper } => TypeRef::Wildcard {
                upper: upper
                    .as_ref()
                    .map(|bound| Box::new(bound.substitute(bindings))),
            },
            TypeRef::Primitive(_) => self.clone(),
        }
    }

    /// The raw form of a declared type; other types are returned unchanged.
    pub fn erasure(&self) -> TypeRef {
        match self {
            TypeRef::Declared { name, .. } => TypeRef::declared(name.as_str()),
            other => other.clone(),
        }
    }

    /// Spelling used for exact catalog lookup: a primitive keyword or the qualified name of a
    /// non-parameterized declared type.
    pub fn catalog_spelling(&self) -> Option<&str> {
        match self {
            TypeRef::Primitive(id) => Some(primitives::as_str(*id)),
            TypeRef::Declared { name, args } if args.is_empty() => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(id) => f.write_str(primitives::as_str(*id)),
            TypeRef::Declared { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeRef::Array(component) => write!(f, "{component}[]"),
            TypeRef::Wildcard { upper: None } => f.write_str("?"),
            TypeRef::Wildcard { upper: Some(upper) } => write!(f, "? extends {upper}"),
            TypeRef::Var(name) => f.write_str(name),
        }
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.to_string()
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeParser::new(s).parse()
    }
}

/// A type spelling that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type `{input}` at offset {offset}: {message}")]
pub struct TypeParseError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}

fn is_type_variable(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_digit())
}

/// Recursive-descent parser for Java type spellings.
///
/// ```text
/// type := base ("[" "]")*
/// base := "?" ("extends" type)? | ident ("." ident)* ("<" type ("," type)* ">")?
/// ```
struct TypeParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TypeParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse(mut self) -> Result<TypeRef, TypeParseError> {
        let ty = self.parse_type()?;
        self.skip_ws();
        if self.pos != self.src.len() {
            return Err(self.error("unexpected trailing input"));
        }
        Ok(ty)
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeParseError> {
        let mut ty = self.parse_base()?;
        while self.eat('[') {
            self.expect(']')?;
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    fn parse_base(&mut self) -> Result<TypeRef, TypeParseError> {
        if self.eat('?') {
            self.skip_ws();
            if self.rest().starts_with("extends") {
                self.pos += "extends".len();
                let upper = self.parse_type()?;
                return Ok(TypeRef::wildcard_extends(upper));
            }
            return Ok(TypeRef::Wildcard { upper: None });
        }

        let mut name = self.ident()?.to_string();
        while self.eat('.') {
            name.push('.');
            name.push_str(self.ident()?);
        }

        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_type()?);
                if self.eat(',') {
                    continue;
                }
                self.expect('>')?;
                break;
            }
        }

        if args.is_empty() && !name.contains('.') {
            if let Some(id) = primitives::from_keyword(&name) {
                return Ok(TypeRef::Primitive(id));
            }
            if is_type_variable(&name) {
                return Ok(TypeRef::Var(name));
            }
        }
        Ok(TypeRef::Declared { name, args })
    }

    fn ident(&mut self) -> Result<&'a str, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
                self.bump();
            }
            _ => return Err(self.error("expected identifier")),
        }
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '$') {
            self.bump();
        }
        Ok(&self.src[start..self.pos])
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{expected}`")))
        }
    }

    fn error(&self, message: impl Into<String>) -> TypeParseError {
        TypeParseError {
            input: self.src.to_string(),
            offset: self.pos,
            message: message.into(),
        }
    }
}
