//! Per-method and per-parameter resolution.

use routegen_common::Diagnostic;
use routegen_common::identifiers::{camel_to_pascal_case, escape_identifier, pascal_to_camel_case};
use routegen_decl::{MethodDecl, MethodKind, ParameterDecl, RefKind};
use tracing::{debug, trace};

use crate::binding;
use crate::default_value;
use crate::known::{annotations, types};
use crate::model::{BindingSource, EntityKind, Parameter, ParameterOrigin, RouteMethod};
use crate::options::ParameterCase;

const ASYNC_SUFFIX: &str = "Async";
const HANDLER_PREFIX: &str = "On";
const HANDLER_VERBS: [&str; 7] = ["Delete", "Get", "Head", "Options", "Patch", "Post", "Put"];

enum ParameterOutcome {
    Keep(Parameter),
    Skip,
    ExcludeMethod,
}

/// Resolve one method into a route method candidate.
///
/// The returned method has `output_identifier == name` and no consolidated
/// types; both are filled in once every method of the entity is known.
pub(crate) fn resolve_method(
    method: &MethodDecl,
    kind: EntityKind,
    parameter_case: ParameterCase,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<RouteMethod> {
    if method.kind != MethodKind::Ordinary || method.is_generic() {
        trace!(method = %method.name, "not an ordinary non-generic method");
        return None;
    }
    if method.parameters.iter().any(|parameter| parameter.ref_kind != RefKind::None) {
        debug!(method = %method.name, "method with by-reference parameters rejected");
        return None;
    }

    let naming = match kind {
        EntityKind::Controller => controller_action_naming(method, diagnostics)?,
        EntityKind::Page => page_handler_naming(method, diagnostics)?,
    };

    let mut parameters = Vec::with_capacity(method.parameters.len());
    for parameter in &method.parameters {
        match resolve_parameter(parameter, parameter_case, diagnostics) {
            ParameterOutcome::Keep(resolved) => parameters.push(resolved),
            ParameterOutcome::Skip => {}
            ParameterOutcome::ExcludeMethod => {
                debug!(
                    method = %method.name,
                    parameter = %parameter.name,
                    "server-injected parameter excludes method"
                );
                return None;
            }
        }
    }

    Some(RouteMethod {
        escaped_name: escape_identifier(&naming.name),
        output_identifier: naming.name.clone(),
        name: naming.name,
        division_value: naming.division_value,
        area_override: naming.area_override,
        qualified_signature_text: method.annotated_signature(),
        parameters,
        parameter_value_types: Vec::new(),
        location: method.location.clone(),
    })
}

struct MethodNaming {
    name: String,
    division_value: Option<String>,
    area_override: Option<String>,
}

fn controller_action_naming(method: &MethodDecl, diagnostics: &mut Vec<Diagnostic>) -> Option<MethodNaming> {
    let stripped = method.name.strip_suffix(ASYNC_SUFFIX).unwrap_or(&method.name);
    let mut naming = MethodNaming {
        name: stripped.to_string(),
        division_value: Some(stripped.to_string()),
        area_override: None,
    };

    for annotation in &method.annotations {
        match annotation.name.as_str() {
            annotations::ACTION_NAME => {
                if let Some(action_name) = annotation.first_string_argument() {
                    naming.division_value = Some(action_name.to_string());
                }
            }
            annotations::AREA => {
                if let Some(area) = annotation.first_string_argument() {
                    naming.area_override = Some(area.to_string());
                }
            }
            annotations::NON_ACTION | annotations::EXCLUDE_FROM_ROUTE_GENERATOR => {
                trace!(method = %method.name, annotation = %annotation.name, "action excluded");
                return None;
            }
            annotations::ROUTE_GENERATOR_NAME => {
                if let Some(renamed) = binding::rename(annotation, camel_to_pascal_case, diagnostics) {
                    naming.name = renamed;
                }
            }
            _ => {}
        }
    }

    if naming.name.is_empty() {
        return None;
    }
    Some(naming)
}

/// Split `On<Verb><Handler>[Async]` into `<Verb><Handler>` and `<Handler>`.
pub(crate) fn parse_handler_name(method_name: &str) -> Option<(&str, Option<&str>)> {
    let rest = method_name.strip_prefix(HANDLER_PREFIX)?;
    let name = rest.strip_suffix(ASYNC_SUFFIX).unwrap_or(rest);
    let verb = HANDLER_VERBS.iter().find(|verb| name.starts_with(*verb))?;
    let handler = &name[verb.len()..];
    Some((name, (!handler.is_empty()).then_some(handler)))
}

fn page_handler_naming(method: &MethodDecl, diagnostics: &mut Vec<Diagnostic>) -> Option<MethodNaming> {
    let (name, handler) = parse_handler_name(&method.name)?;
    let mut naming = MethodNaming {
        name: name.to_string(),
        division_value: handler.map(str::to_string),
        area_override: None,
    };

    for annotation in &method.annotations {
        match annotation.name.as_str() {
            annotations::NON_HANDLER | annotations::EXCLUDE_FROM_ROUTE_GENERATOR => {
                trace!(method = %method.name, annotation = %annotation.name, "handler excluded");
                return None;
            }
            annotations::ROUTE_GENERATOR_NAME => {
                if let Some(renamed) = binding::rename(annotation, camel_to_pascal_case, diagnostics) {
                    naming.name = renamed;
                }
            }
            _ => {}
        }
    }

    Some(naming)
}

fn resolve_parameter(
    parameter: &ParameterDecl,
    parameter_case: ParameterCase,
    diagnostics: &mut Vec<Diagnostic>,
) -> ParameterOutcome {
    if parameter.ty.identity() == types::CANCELLATION_TOKEN {
        return ParameterOutcome::Skip;
    }

    let mut source: Option<BindingSource> = None;
    let mut generator_name = None;

    for annotation in &parameter.annotations {
        if let Some(kind) = binding::parameter_source_kind(annotation) {
            if source.is_none() {
                source = Some(binding::binding_source(annotation, kind));
            }
            continue;
        }
        if binding::is_server_injected(annotation) {
            if source.is_none() {
                return ParameterOutcome::ExcludeMethod;
            }
            continue;
        }
        match annotation.name.as_str() {
            annotations::EXCLUDE_FROM_ROUTE_GENERATOR => return ParameterOutcome::Skip,
            annotations::ROUTE_GENERATOR_NAME => {
                if let Some(renamed) = binding::rename(annotation, pascal_to_camel_case, diagnostics) {
                    generator_name = Some(renamed);
                }
            }
            _ => {}
        }
    }

    let generator_name = generator_name.unwrap_or_else(|| parameter.name.clone());
    let output_name = match parameter_case {
        ParameterCase::Standard => generator_name,
        ParameterCase::Pascal => camel_to_pascal_case(&generator_name),
    };
    let route_key = source
        .as_ref()
        .and_then(|source| source.explicit_name.clone())
        .unwrap_or_else(|| parameter.name.clone());

    ParameterOutcome::Keep(Parameter {
        original_name: parameter.name.clone(),
        property_name: Some(camel_to_pascal_case(&output_name)),
        output_name,
        route_key,
        ty: parameter.ty.descriptor.clone(),
        default_value_expression: parameter.default_value.as_ref().map(default_value::render),
        binding_source: source,
        origin: ParameterOrigin::Declared,
    })
}
