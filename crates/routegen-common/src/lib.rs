//! Common types and utilities for the routegen route model resolver.
//!
//! This crate provides foundational types used across all routegen crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, codes and message templates)
//! - Source locations for diagnostics (`SourceLocation`)
//! - Identifier rules for generated code (validity, keyword escaping, casing)

// Diagnostic types, codes and message templates
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, format_message};

// Source locations attached to declarations, annotations and diagnostics
pub mod location;
pub use location::SourceLocation;

// Identifier validation, escaping and casing
pub mod identifiers;

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
#[cfg(test)]
#[path = "tests/identifiers_tests.rs"]
mod identifiers_tests;
