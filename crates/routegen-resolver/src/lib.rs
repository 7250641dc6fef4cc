//! Route model resolution.
//!
//! Turns a [`routegen_decl::DeclarationSet`] into the resolved route model:
//! - `prefilter` / `classify` - which declarations are controllers or pages
//! - `entity` / `method` - names, annotations, members and route methods
//! - `conflicts` - overload collapsing, conflicts, unique identifiers, property merge
//! - `consolidate` - nullability reconciliation of shared types
//! - `pipeline` - the whole run, data-parallel over entities

mod binding;
pub mod classify;
mod conflicts;
pub mod consolidate;
pub mod default_value;
pub mod entity;
pub mod known;
mod method;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod prefilter;

pub use classify::{Classification, classify};
pub use consolidate::consolidate;
pub use entity::{ResolvedEntity, resolve};
pub use model::{
    BindingSource, BindingSourceKind, BoundMember, EntityKind, Parameter, ParameterOrigin, RouteEntity,
    RouteMethod, RunOutput,
};
pub use options::{AccessModifier, GeneratorOptions, ParameterCase};
pub use pipeline::{Candidate, run, run_with_cancellation};
pub use prefilter::is_candidate;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod classify_tests;
#[cfg(test)]
#[path = "tests/conflicts_tests.rs"]
mod conflicts_tests;
#[cfg(test)]
#[path = "tests/consolidate_tests.rs"]
mod consolidate_tests;
#[cfg(test)]
#[path = "tests/default_value_tests.rs"]
mod default_value_tests;
#[cfg(test)]
#[path = "tests/entity_tests.rs"]
mod entity_tests;
#[cfg(test)]
#[path = "tests/method_tests.rs"]
mod method_tests;
#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
