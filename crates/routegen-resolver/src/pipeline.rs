//! End-to-end resolution over a declaration set.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use routegen_decl::{DeclId, DeclarationSet};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::classify::{Classification, classify};
use crate::conflicts;
use crate::entity::{ResolvedEntity, resolve};
use crate::model::{EntityKind, RouteEntity, RunOutput};
use crate::options::GeneratorOptions;
use crate::prefilter::is_candidate;

/// One syntactic sighting of a declaration; partial types produce several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub id: DeclId,
    pub fragment: usize,
}

/// Every fragment of every declaration that passes the pre-filter.
pub fn discover_candidates(set: &DeclarationSet) -> Vec<Candidate> {
    set.iter()
        .filter(|(_, declaration)| is_candidate(declaration))
        .flat_map(|(id, declaration)| {
            (0..declaration.fragments.len()).map(move |fragment| Candidate { id, fragment })
        })
        .collect()
}

/// One candidate per declared type, in first-sighting order.
pub fn dedup_candidates(candidates: &[Candidate]) -> Vec<DeclId> {
    let mut seen = FxHashSet::default();
    candidates
        .iter()
        .filter(|candidate| seen.insert(candidate.id))
        .map(|candidate| candidate.id)
        .collect()
}

/// Run the pipeline to completion.
pub fn run(set: &DeclarationSet, options: &GeneratorOptions) -> RunOutput {
    run_with_cancellation(set, options, &AtomicBool::new(false))
}

/// Run the pipeline, checking `cancel` before each entity resolution.
///
/// A cancelled run still reports every entity that finished resolving and
/// sets `cancelled`.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = set.len()))]
pub fn run_with_cancellation(set: &DeclarationSet, options: &GeneratorOptions, cancel: &AtomicBool) -> RunOutput {
    let mut diagnostics = options.diagnostics.clone();

    let candidates = discover_candidates(set);
    let classified: Vec<(DeclId, Classification)> = dedup_candidates(&candidates)
        .into_iter()
        .filter_map(|id| classify(set, id).map(|classification| (id, classification)))
        .collect();
    debug!(
        candidates = candidates.len(),
        classified = classified.len(),
        "candidates classified"
    );

    let mut cancelled = false;
    let mut resolve_kind = |kind: EntityKind| -> Vec<RouteEntity> {
        let ids: Vec<DeclId> = classified
            .iter()
            .filter(|(_, classification)| classification.kinds().any(|candidate_kind| candidate_kind == kind))
            .map(|(id, _)| *id)
            .collect();

        let results: Vec<Option<ResolvedEntity>> = ids
            .par_iter()
            .map(|&id| {
                if cancel.load(Ordering::Relaxed) {
                    None
                } else {
                    Some(resolve(set, id, kind, options))
                }
            })
            .collect();

        let mut entities = Vec::with_capacity(results.len());
        for result in results {
            let Some(resolved) = result else {
                cancelled = true;
                continue;
            };
            diagnostics.extend(resolved.diagnostics);
            entities.extend(resolved.entity);
        }
        conflicts::drop_conflicting_entities(kind, entities, &mut diagnostics)
    };

    let controllers = resolve_kind(EntityKind::Controller);
    let pages = resolve_kind(EntityKind::Page);

    debug!(
        controllers = controllers.len(),
        pages = pages.len(),
        cancelled,
        "run finished"
    );

    RunOutput {
        controllers,
        pages,
        options: options.clone(),
        diagnostics,
        cancelled,
    }
}
