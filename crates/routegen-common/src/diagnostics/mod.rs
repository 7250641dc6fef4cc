//! Diagnostic types and message lookup for the route model resolver.
//!
//! Message templates and codes live in `data.rs`. Templates use positional
//! `{0}`, `{1}` placeholders filled by [`format_message`].

use serde::Serialize;
use std::fmt;

use crate::location::SourceLocation;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages};

/// Prefix rendered in front of every diagnostic code (`RG0001`).
pub const CODE_PREFIX: &str = "RG";

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
///
/// The resolver only ever reports errors; warnings exist for hosts that wrap
/// the pipeline with their own checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Static description of a diagnostic kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub title: &'static str,
    pub message: &'static str,
}

/// A resolver diagnostic with an optional source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(code: u32, message: impl Into<String>, location: Option<SourceLocation>) -> Self {
        Self {
            code,
            category: DiagnosticCategory::Error,
            message_text: message.into(),
            location,
        }
    }

    /// Create an error from a message template and its arguments.
    #[must_use]
    pub fn from_template(
        code: u32,
        template: &str,
        args: &[&str],
        location: Option<SourceLocation>,
    ) -> Self {
        Self::error(code, format_message(template, args), location)
    }

    /// The code as rendered to users, e.g. `RG0003`.
    pub fn code_text(&self) -> String {
        format_code(self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location} - ")?;
        }
        write!(
            f,
            "{} {}: {}",
            self.category.as_str(),
            self.code_text(),
            self.message_text
        )
    }
}

// =============================================================================
// Message Helpers
// =============================================================================

pub fn format_code(code: u32) -> String {
    format!("{CODE_PREFIX}{code:04}")
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn get_message_title(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.title)
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
