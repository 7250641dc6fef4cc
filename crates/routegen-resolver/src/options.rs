//! Generator options.
//!
//! Options arrive as analyzer-config style key/value pairs. Each recognised
//! key is validated independently; an invalid value keeps the default and
//! records one invalid-option diagnostic.

use routegen_common::Diagnostic;
use routegen_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use routegen_common::identifiers::is_valid_namespace;
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, trace};

pub const ACCESS_MODIFIER_OPTION: &str = "route_generator.generated_access_modifier";
pub const NAMESPACE_OPTION: &str = "route_generator.generated_namespace";
pub const PARAMETER_CASE_OPTION: &str = "route_generator.generated_parameter_case";

pub const DEFAULT_NAMESPACE: &str = "Routes";

/// Access level of the generated declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    #[default]
    Public,
    Internal,
}

impl AccessModifier {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Self::Public),
            "internal" => Some(Self::Internal),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
        }
    }
}

/// Casing applied to generated parameter names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterCase {
    /// Parameters keep their declared names; renames are camelCased.
    #[default]
    Standard,
    /// Every parameter name is PascalCased.
    Pascal,
}

impl ParameterCase {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "standard" => Some(Self::Standard),
            "pascal" => Some(Self::Pascal),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pascal => "pascal",
        }
    }
}

/// Resolved options for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratorOptions {
    pub access_modifier: AccessModifier,
    pub root_namespace: String,
    pub parameter_case: ParameterCase,
    /// Invalid-option diagnostics; reported once per run by the pipeline.
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            access_modifier: AccessModifier::Public,
            root_namespace: DEFAULT_NAMESPACE.to_string(),
            parameter_case: ParameterCase::Standard,
            diagnostics: Vec::new(),
        }
    }
}

impl GeneratorOptions {
    /// Build options from key/value entries. Later entries override earlier
    /// ones with the same key; unrecognised keys are ignored.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values: FxHashMap<String, String> = FxHashMap::default();
        for (key, value) in entries {
            values.insert(key.as_ref().to_string(), value.as_ref().to_string());
        }

        let mut options = Self::default();

        if let Some(value) = values.get(ACCESS_MODIFIER_OPTION) {
            match AccessModifier::parse(value) {
                Some(access_modifier) => options.access_modifier = access_modifier,
                None => options.invalid(
                    ACCESS_MODIFIER_OPTION,
                    &format!("'{value}' is not a supported access modifier, must be public or internal."),
                ),
            }
        }

        if let Some(value) = values.get(NAMESPACE_OPTION) {
            if is_valid_namespace(value) {
                options.root_namespace.clone_from(value);
            } else {
                options.invalid(
                    NAMESPACE_OPTION,
                    &format!("'{value}' is not a valid namespace identifier."),
                );
            }
        }

        if let Some(value) = values.get(PARAMETER_CASE_OPTION) {
            match ParameterCase::parse(value) {
                Some(parameter_case) => options.parameter_case = parameter_case,
                None => options.invalid(
                    PARAMETER_CASE_OPTION,
                    &format!("'{value}' is not a supported parameter case, must be standard or pascal."),
                ),
            }
        }

        for key in values.keys() {
            if !matches!(
                key.as_str(),
                ACCESS_MODIFIER_OPTION | NAMESPACE_OPTION | PARAMETER_CASE_OPTION
            ) {
                trace!(key = %key, "ignoring unrecognised option");
            }
        }

        options
    }

    fn invalid(&mut self, key: &str, reason: &str) {
        debug!(key, reason, "invalid generator option; keeping default");
        self.diagnostics.push(Diagnostic::from_template(
            diagnostic_codes::INVALID_OPTION,
            diagnostic_messages::INVALID_OPTION,
            &[key, reason],
            None,
        ));
    }
}
