use bitflags::bitflags;
use routegen_common::SourceLocation;
use serde::{Deserialize, Serialize};

use crate::annotations::Annotation;
use crate::members::Member;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

bitflags! {
    /// Modifiers and shape of a declared type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DeclFlags: u32 {
        const STATIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const GENERIC = 1 << 2;
        const NESTED = 1 << 3;
        const INTERFACE = 1 << 4;
        const STRUCT = 1 << 5;
        const RECORD = 1 << 6;
    }
}

impl Default for DeclFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A declared (source) type.
///
/// `fragments` lists one location per syntactic declaration; a partial type
/// has several. `base` is the display identity of the direct base type and
/// resolves either to another declaration in the set or to an external type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    #[serde(default)]
    pub name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub fully_qualified_name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub flags: DeclFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
    #[serde(default)]
    pub fragments: Vec<SourceLocation>,
}

impl TypeDeclaration {
    /// A public, non-generic class declared in `{name}.cs`.
    pub fn class(qualified_name: &str) -> Self {
        let mut declaration = Self {
            name: String::new(),
            qualified_name: qualified_name.to_string(),
            fully_qualified_name: String::new(),
            accessibility: Accessibility::Public,
            flags: DeclFlags::empty(),
            base: None,
            interfaces: Vec::new(),
            annotations: Vec::new(),
            members: Vec::new(),
            fragments: Vec::new(),
        };
        declaration.normalize();
        declaration
    }

    #[must_use]
    pub fn extends(mut self, base: &str) -> Self {
        self.base = Some(base.to_string());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: &str) -> Self {
        self.interfaces.push(interface.to_string());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: DeclFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<Member>) -> Self {
        let mut member = member.into();
        member.normalize();
        self.members.push(member);
        self
    }

    /// Adds a declaration fragment located in `file`.
    #[must_use]
    pub fn declared_in(mut self, file: &str) -> Self {
        if self.fragments.len() == 1 && self.fragments[0] == self.default_fragment() {
            self.fragments.clear();
        }
        self.fragments.push(SourceLocation::file(file));
        self
    }

    /// Fills in derived fields a dump may omit.
    pub fn normalize(&mut self) {
        if self.name.is_empty() {
            self.name = simple_name(&self.qualified_name).to_string();
        }
        if self.fully_qualified_name.is_empty() {
            self.fully_qualified_name = format!("global::{}", self.qualified_name);
        }
        if self.fragments.is_empty() {
            self.fragments.push(self.default_fragment());
        }
        for member in &mut self.members {
            member.normalize();
        }
    }

    fn default_fragment(&self) -> SourceLocation {
        SourceLocation::file(format!("{}.cs", self.name))
    }

    pub fn is_public(&self) -> bool {
        self.accessibility.is_public()
    }

    pub fn has_base_list(&self) -> bool {
        self.base.is_some() || !self.interfaces.is_empty()
    }

    /// The location diagnostics about this type point at.
    pub fn primary_location(&self) -> Option<&SourceLocation> {
        self.fragments.first()
    }
}

fn simple_name(qualified_name: &str) -> &str {
    let without_arity = qualified_name.split('<').next().unwrap_or(qualified_name);
    without_arity.rsplit('.').next().unwrap_or(without_arity)
}
