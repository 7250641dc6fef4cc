//! Annotation-driven binding and renaming.

use routegen_common::Diagnostic;
use routegen_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use routegen_common::identifiers::is_valid_identifier;
use routegen_decl::Annotation;
use tracing::trace;

use crate::known::{annotations, arguments};
use crate::model::{BindingSource, BindingSourceKind};

/// Binding source kind named by a parameter annotation.
pub(crate) fn parameter_source_kind(annotation: &Annotation) -> Option<BindingSourceKind> {
    match annotation.name.as_str() {
        annotations::FROM_BODY => Some(BindingSourceKind::Body),
        annotations::FROM_FORM => Some(BindingSourceKind::Form),
        annotations::FROM_HEADER => Some(BindingSourceKind::Header),
        annotations::FROM_QUERY => Some(BindingSourceKind::Query),
        annotations::FROM_ROUTE => Some(BindingSourceKind::Route),
        _ => None,
    }
}

/// Binding source kind named by a property annotation.
pub(crate) fn property_source_kind(annotation: &Annotation) -> Option<BindingSourceKind> {
    match annotation.name.as_str() {
        annotations::BIND_PROPERTY => Some(BindingSourceKind::Custom),
        _ => parameter_source_kind(annotation),
    }
}

pub(crate) fn is_server_injected(annotation: &Annotation) -> bool {
    matches!(
        annotation.name.as_str(),
        annotations::FROM_SERVICES | annotations::FROM_KEYED_SERVICES
    )
}

/// Read `Name` and `SupportsGet` off a binding annotation.
pub(crate) fn binding_source(annotation: &Annotation, kind: BindingSourceKind) -> BindingSource {
    BindingSource {
        kind,
        explicit_name: annotation.named_string(arguments::NAME).map(str::to_string),
        supports_get: annotation.named_bool(arguments::SUPPORTS_GET).unwrap_or(false),
    }
}

/// Apply a rename annotation.
///
/// Returns the cased name for a valid identifier. An invalid identifier is
/// reported at the annotation and yields `None`, as does an annotation without
/// a string argument.
pub(crate) fn rename(
    annotation: &Annotation,
    case: fn(&str) -> String,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let value = annotation.first_string_argument()?;
    if is_valid_identifier(value) {
        trace!(value, "rename applied");
        Some(case(value))
    } else {
        diagnostics.push(Diagnostic::from_template(
            diagnostic_codes::INVALID_IDENTIFIER,
            diagnostic_messages::INVALID_IDENTIFIER,
            &[value],
            annotation.location.clone(),
        ));
        None
    }
}
