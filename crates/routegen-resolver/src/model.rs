//! The resolved route model handed to an emitter.

use routegen_common::identifiers::escape_identifier;
use routegen_common::{Diagnostic, SourceLocation};
use routegen_decl::TypeDescriptor;
use serde::Serialize;

use crate::options::GeneratorOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Controller,
    Page,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Page => "page",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingSourceKind {
    Body,
    Form,
    Header,
    Query,
    Route,
    Custom,
}

/// Declared origin of a request value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BindingSource {
    pub kind: BindingSourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_name: Option<String>,
    pub supports_get: bool,
}

impl BindingSource {
    pub fn new(kind: BindingSourceKind) -> Self {
        Self {
            kind,
            explicit_name: None,
            supports_get: false,
        }
    }

    /// Whether a value from this source is encoded into the URL.
    ///
    /// Custom sources (model binders) only reach the URL for parameters, or for
    /// properties that opt into GET binding.
    pub fn affects_url(&self, is_parameter: bool) -> bool {
        match self.kind {
            BindingSourceKind::Query | BindingSourceKind::Route => true,
            BindingSourceKind::Body | BindingSourceKind::Form | BindingSourceKind::Header => false,
            BindingSourceKind::Custom => is_parameter || self.supports_get,
        }
    }
}

/// A property that binds a request value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoundMember {
    pub original_name: String,
    pub output_name: String,
    pub route_key: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub binding_source: BindingSource,
}

impl BoundMember {
    pub fn escaped_output_name(&self) -> String {
        escape_identifier(&self.output_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterOrigin {
    Declared,
    /// Synthesized from a URL-affecting bound member.
    Property,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub original_name: String,
    pub output_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    pub route_key: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_source: Option<BindingSource>,
    pub origin: ParameterOrigin,
}

impl Parameter {
    /// Parameters without a binding source are ordinary bindable values and
    /// always reach the URL.
    pub fn affects_url(&self) -> bool {
        self.binding_source
            .as_ref()
            .map_or(true, |source| source.affects_url(true))
    }

    pub fn escaped_output_name(&self) -> String {
        escape_identifier(&self.output_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteMethod {
    pub name: String,
    pub escaped_name: String,
    pub output_identifier: String,
    /// Action name for controllers, handler name for pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_override: Option<String>,
    pub qualified_signature_text: String,
    pub parameters: Vec<Parameter>,
    pub parameter_value_types: Vec<TypeDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntity {
    pub kind: EntityKind,
    /// Controller name, or the page path (`/Admin/Index`).
    pub route_value: String,
    pub output_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_namespace: String,
    pub qualified_identity: String,
    pub bound_members: Vec<BoundMember>,
    pub property_value_types: Vec<TypeDescriptor>,
    pub route_methods: Vec<RouteMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl RouteEntity {
    /// Key under which two entities of the same kind collide.
    pub fn identity_key(&self) -> (Option<&str>, &str) {
        (self.area.as_deref(), self.output_name.as_str())
    }
}

/// Everything one pipeline run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub controllers: Vec<RouteEntity>,
    pub pages: Vec<RouteEntity>,
    pub options: GeneratorOptions,
    pub diagnostics: Vec<Diagnostic>,
    pub cancelled: bool,
}

impl RunOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
