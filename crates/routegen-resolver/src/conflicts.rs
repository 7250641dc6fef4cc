//! Method identity, entity identity and property merging.

use routegen_common::Diagnostic;
use routegen_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use routegen_common::identifiers::{camel_to_pascal_case, pascal_to_camel_case};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::model::{BoundMember, EntityKind, Parameter, ParameterOrigin, RouteEntity, RouteMethod};
use crate::options::ParameterCase;

fn signature_key<'a>(name: &str, types: impl Iterator<Item = &'a str>) -> String {
    let types: SmallVec<[&str; 8]> = types.collect();
    format!("{name}({})", types.join(", "))
}

/// Apply method collapsing, conflict detection and unique identifiers.
///
/// Methods are processed in discovery order (most-derived first):
/// - a repeated full signature is dropped silently
/// - a repeated URL-affecting signature is reported and dropped
/// - a repeated name gets the smallest free numeric suffix from 2
pub(crate) fn resolve_method_identities(
    class_name: &str,
    candidates: Vec<RouteMethod>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<RouteMethod> {
    let mut full_signatures: FxHashSet<String> = FxHashSet::default();
    let mut url_signatures: FxHashSet<String> = FxHashSet::default();
    let mut identifiers: FxHashSet<String> = FxHashSet::default();
    let mut retained = Vec::with_capacity(candidates.len());

    for mut method in candidates {
        let full_signature = signature_key(
            &method.name,
            method.parameters.iter().map(|parameter| parameter.ty.fully_qualified.as_str()),
        );
        if full_signatures.contains(&full_signature) {
            trace!(signature = %full_signature, "collapsed overload");
            continue;
        }

        let url_signature = signature_key(
            &method.name,
            method
                .parameters
                .iter()
                .filter(|parameter| parameter.affects_url())
                .map(|parameter| parameter.ty.fully_qualified.as_str()),
        );
        if !url_signatures.insert(url_signature.clone()) {
            debug!(class = class_name, signature = %url_signature, "conflicting route methods");
            diagnostics.push(Diagnostic::from_template(
                diagnostic_codes::CONFLICTING_METHODS,
                diagnostic_messages::CONFLICTING_METHODS,
                &[class_name, &url_signature],
                method.location.clone(),
            ));
            continue;
        }

        if !identifiers.insert(method.name.clone()) {
            let mut suffix = 2u32;
            let unique = loop {
                let candidate = format!("{}{suffix}", method.name);
                if identifiers.insert(candidate.clone()) {
                    break candidate;
                }
                suffix += 1;
            };
            method.output_identifier = unique;
        }

        full_signatures.insert(full_signature);
        retained.push(method);
    }

    retained
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Whether `member` is already represented among `parameters`.
fn corresponds(member: &BoundMember, parameters: &[Parameter]) -> bool {
    parameters.iter().any(|parameter| {
        eq_ignore_case(&parameter.original_name, &member.original_name)
            || eq_ignore_case(&parameter.original_name, &member.output_name)
            || (parameter.affects_url() && eq_ignore_case(&parameter.route_key, &member.route_key))
    })
}

/// Append a parameter for every URL-affecting bound member a method does not
/// already accept.
pub(crate) fn merge_bound_members(
    methods: &mut [RouteMethod],
    members: &[BoundMember],
    parameter_case: ParameterCase,
) {
    for method in methods {
        for member in members.iter().filter(|member| member.binding_source.affects_url(false)) {
            if corresponds(member, &method.parameters) {
                trace!(method = %method.name, member = %member.original_name, "bound member already a parameter");
                continue;
            }
            let output_name = match parameter_case {
                ParameterCase::Standard => pascal_to_camel_case(&member.output_name),
                ParameterCase::Pascal => camel_to_pascal_case(&member.output_name),
            };
            method.parameters.push(Parameter {
                original_name: member.original_name.clone(),
                output_name,
                property_name: None,
                route_key: member.route_key.clone(),
                ty: member.ty.clone(),
                default_value_expression: None,
                binding_source: Some(member.binding_source.clone()),
                origin: ParameterOrigin::Property,
            });
        }
    }
}

/// Keep the first entity per (area, output name); report and drop the rest.
pub(crate) fn drop_conflicting_entities(
    kind: EntityKind,
    entities: Vec<RouteEntity>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<RouteEntity> {
    let mut seen: FxHashSet<(Option<String>, String)> = FxHashSet::default();
    let mut survivors = Vec::with_capacity(entities.len());

    for entity in entities {
        let key = (entity.area.clone(), entity.output_name.clone());
        if seen.insert(key) {
            survivors.push(entity);
            continue;
        }
        debug!(entity = %entity.qualified_identity, kind = kind.as_str(), "conflicting entity dropped");
        let diagnostic = match kind {
            EntityKind::Controller => Diagnostic::from_template(
                diagnostic_codes::CONFLICTING_CONTROLLER,
                diagnostic_messages::CONFLICTING_CONTROLLER,
                &[&entity.output_name],
                entity.location.clone(),
            ),
            EntityKind::Page => Diagnostic::from_template(
                diagnostic_codes::CONFLICTING_PAGE_CLASS,
                diagnostic_messages::CONFLICTING_PAGE_CLASS,
                &[&entity.qualified_identity],
                entity.location.clone(),
            ),
        };
        diagnostics.push(diagnostic);
    }

    survivors
}
