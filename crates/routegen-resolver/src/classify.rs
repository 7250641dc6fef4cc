//! Controller / page classification.

use routegen_decl::{DeclId, DeclarationSet};
use serde::Serialize;
use tracing::trace;

use crate::known::{self, annotations};
use crate::model::EntityKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_controller: bool,
    pub is_page: bool,
}

impl Classification {
    pub fn kinds(self) -> impl Iterator<Item = EntityKind> {
        [
            self.is_controller.then_some(EntityKind::Controller),
            self.is_page.then_some(EntityKind::Page),
        ]
        .into_iter()
        .flatten()
    }
}

/// Classify a declaration by walking it and its ancestors.
///
/// Returns `None` when the declaration is neither controller- nor page-like,
/// or when it excludes itself from generation. Exclusion on an ancestor does
/// not propagate.
pub fn classify(set: &DeclarationSet, id: DeclId) -> Option<Classification> {
    let mut classification = Classification::default();
    let mut has_controller_annotation = false;
    let mut has_non_controller_annotation = false;

    for (depth, view) in set.self_and_ancestors(id).enumerate() {
        let identity = view.identity();
        if known::is_controller_root(identity) {
            classification.is_controller = true;
            break;
        }
        if known::is_page_root(identity) {
            classification.is_page = true;
            break;
        }

        for annotation in view.annotations() {
            match annotation.name.as_str() {
                annotations::CONTROLLER => has_controller_annotation = true,
                annotations::NON_CONTROLLER => has_non_controller_annotation = true,
                annotations::EXCLUDE_FROM_ROUTE_GENERATOR if depth == 0 => {
                    trace!(identity, "declaration excluded from route generation");
                    return None;
                }
                _ => {}
            }
        }
    }

    classification.is_controller |= has_controller_annotation;
    classification.is_controller &= !has_non_controller_annotation;

    if classification.is_controller || classification.is_page {
        Some(classification)
    } else {
        None
    }
}
