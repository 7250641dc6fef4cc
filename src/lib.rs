//! Resolves MVC controllers and Razor pages into a typed route model.
//!
//! The work is split across the workspace crates:
//! - `routegen-common` - diagnostics, source locations, identifier rules
//! - `routegen-decl` - declaration views supplied by a host compiler or a dump
//! - `routegen-resolver` - the resolution pipeline
//!
//! This crate re-exports them and hosts the command-line driver.

pub use routegen_common as common;
pub use routegen_decl as decl;
pub use routegen_resolver as resolver;

pub use routegen_common::{Diagnostic, DiagnosticCategory, SourceLocation};
pub use routegen_decl::DeclarationSet;
pub use routegen_resolver::{GeneratorOptions, RunOutput, run, run_with_cancellation};

pub mod cli;
pub mod tracing_config;
