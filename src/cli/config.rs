use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use routegen_resolver::GeneratorOptions;
use routegen_resolver::options::{ACCESS_MODIFIER_OPTION, NAMESPACE_OPTION, PARAMETER_CASE_OPTION};

/// Contents of a routegen configuration file.
///
/// Options can be spelled in camelCase (`generatedNamespace`) or with their
/// analyzer-config keys (`route_generator.generated_namespace`). The camelCase
/// spelling wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGenConfig {
    #[serde(default)]
    pub generated_access_modifier: Option<String>,
    #[serde(default)]
    pub generated_namespace: Option<String>,
    #[serde(default)]
    pub generated_parameter_case: Option<String>,
    /// Every other key, passed through verbatim.
    #[serde(default, flatten)]
    pub analyzer_options: IndexMap<String, String>,
}

impl RouteGenConfig {
    /// Option entries in application order; later entries override earlier ones.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .analyzer_options
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let named = [
            (ACCESS_MODIFIER_OPTION, &self.generated_access_modifier),
            (NAMESPACE_OPTION, &self.generated_namespace),
            (PARAMETER_CASE_OPTION, &self.generated_parameter_case),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                entries.push((key.to_string(), value.clone()));
            }
        }
        entries
    }
}

pub fn parse_config(source: &str) -> Result<RouteGenConfig> {
    serde_json::from_str(source).context("failed to parse routegen config")
}

pub fn load_config(path: &Path) -> Result<RouteGenConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read routegen config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid routegen config {}", path.display()))
}

/// Merge file options and command-line overrides, then validate.
///
/// Validation problems surface as invalid-option diagnostics on the returned
/// options rather than as errors.
pub fn resolve_options(config: Option<&RouteGenConfig>, overrides: &[(String, String)]) -> GeneratorOptions {
    let mut entries = config.map(RouteGenConfig::entries).unwrap_or_default();
    entries.extend(overrides.iter().cloned());
    GeneratorOptions::from_entries(entries)
}
