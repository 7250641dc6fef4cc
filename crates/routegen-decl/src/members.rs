use bitflags::bitflags;
use routegen_common::SourceLocation;
use serde::{Deserialize, Serialize};

use crate::annotations::Annotation;
use crate::declaration::Accessibility;
use crate::expr::Expr;
use crate::types::TypeRef;

bitflags! {
    /// Member modifiers relevant to route discovery.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MemberFlags: u32 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        /// Compiler-synthesized (record members, default constructors).
        const IMPLICIT = 1 << 2;
        const OVERRIDE = 1 << 3;
        const VIRTUAL = 1 << 4;
    }
}

impl Default for MemberFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    Destructor,
    Operator,
    Conversion,
    PropertyAccessor,
    EventAccessor,
    ExplicitInterfaceImplementation,
    LocalFunction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    #[default]
    None,
    Ref,
    In,
    Out,
    RefReadonly,
}

/// A parameter of a method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub ref_kind: RefKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Expr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl ParameterDecl {
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
            ref_kind: RefKind::None,
            annotations: Vec::new(),
            default_value: None,
            location: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Expr) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn by_ref(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    #[must_use]
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// A method member.
///
/// `display_signature` identifies the member across an inheritance chain
/// (`Index(int, string)`); an override and the method it overrides share it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub display_signature: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub flags: MemberFlags,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub type_parameter_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl MethodDecl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_signature: String::new(),
            accessibility: Accessibility::Public,
            flags: MemberFlags::empty(),
            kind: MethodKind::Ordinary,
            type_parameter_count: 0,
            annotations: Vec::new(),
            parameters: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDecl) -> Self {
        self.parameters.push(parameter);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn generic(mut self, type_parameter_count: u32) -> Self {
        self.type_parameter_count = type_parameter_count;
        self
    }

    #[must_use]
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn is_generic(&self) -> bool {
        self.type_parameter_count > 0
    }

    /// `Name(type, type?)` with nullability markers where they were declared.
    pub fn annotated_signature(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|parameter| parameter.ty.descriptor.fully_qualified.as_str())
            .collect();
        format!("{}({})", self.name, types.join(", "))
    }

    fn computed_display_signature(&self) -> String {
        let types: Vec<&str> = self.parameters.iter().map(|parameter| parameter.ty.identity()).collect();
        format!("{}({})", self.name, types.join(", "))
    }
}

/// A property member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    #[serde(default)]
    pub display_signature: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub flags: MemberFlags,
    /// Accessibility of the getter; `None` when there is no getter.
    #[serde(default = "public_accessor")]
    pub getter: Option<Accessibility>,
    /// Accessibility of the setter; `None` when there is no setter.
    #[serde(default = "public_accessor")]
    pub setter: Option<Accessibility>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

fn public_accessor() -> Option<Accessibility> {
    Some(Accessibility::Public)
}

impl PropertyDecl {
    /// A public read/write property.
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            display_signature: String::new(),
            ty,
            accessibility: Accessibility::Public,
            flags: MemberFlags::empty(),
            getter: public_accessor(),
            setter: public_accessor(),
            annotations: Vec::new(),
            location: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_getter(mut self, getter: Option<Accessibility>) -> Self {
        self.getter = getter;
        self
    }

    #[must_use]
    pub fn with_setter(mut self, setter: Option<Accessibility>) -> Self {
        self.setter = setter;
        self
    }

    pub fn has_public_getter_and_setter(&self) -> bool {
        self.getter.is_some_and(Accessibility::is_public) && self.setter.is_some_and(Accessibility::is_public)
    }
}

/// A member of a declared type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Property(PropertyDecl),
    Method(MethodDecl),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Property(property) => &property.name,
            Self::Method(method) => &method.name,
        }
    }

    pub fn display_signature(&self) -> &str {
        match self {
            Self::Property(property) => &property.display_signature,
            Self::Method(method) => &method.display_signature,
        }
    }

    pub fn accessibility(&self) -> Accessibility {
        match self {
            Self::Property(property) => property.accessibility,
            Self::Method(method) => method.accessibility,
        }
    }

    pub fn flags(&self) -> MemberFlags {
        match self {
            Self::Property(property) => property.flags,
            Self::Method(method) => method.flags,
        }
    }

    pub(crate) fn normalize(&mut self) {
        match self {
            Self::Property(property) => {
                if property.display_signature.is_empty() {
                    property.display_signature.clone_from(&property.name);
                }
            }
            Self::Method(method) => {
                if method.display_signature.is_empty() {
                    method.display_signature = method.computed_display_signature();
                }
            }
        }
    }
}

impl From<PropertyDecl> for Member {
    fn from(property: PropertyDecl) -> Self {
        Self::Property(property)
    }
}

impl From<MethodDecl> for Member {
    fn from(method: MethodDecl) -> Self {
        Self::Method(method)
    }
}
