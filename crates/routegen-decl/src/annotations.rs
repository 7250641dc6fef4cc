use indexmap::IndexMap;
use routegen_common::SourceLocation;
use serde::{Deserialize, Serialize};

/// A constant argument value supplied to an annotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

impl AnnotationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An attribute applied to a declaration, member or parameter.
///
/// `name` is the attribute class identity as the facility displays it
/// (`Microsoft.AspNetCore.Mvc.AreaAttribute`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<AnnotationValue>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub named_arguments: IndexMap<String, AnnotationValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            named_arguments: IndexMap::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_argument(mut self, value: impl Into<AnnotationValue>) -> Self {
        self.arguments.push(value.into());
        self
    }

    #[must_use]
    pub fn with_named(mut self, key: &str, value: impl Into<AnnotationValue>) -> Self {
        self.named_arguments.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// The first positional argument when it is a string constant.
    pub fn first_string_argument(&self) -> Option<&str> {
        self.arguments.first().and_then(AnnotationValue::as_str)
    }

    pub fn named_string(&self, key: &str) -> Option<&str> {
        self.named_arguments.get(key).and_then(AnnotationValue::as_str)
    }

    pub fn named_bool(&self, key: &str) -> Option<bool> {
        self.named_arguments.get(key).and_then(AnnotationValue::as_bool)
    }
}
