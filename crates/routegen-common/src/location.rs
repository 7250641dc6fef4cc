use serde::{Deserialize, Serialize};
use std::fmt;

/// A byte span inside a source file.
///
/// Locations are opaque to the resolver: they are produced by the semantic
/// facility alongside declarations and annotations, and only copied onto
/// diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub length: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            file: file.into(),
            start,
            length,
        }
    }

    /// Location that points at a whole file rather than a span inside it.
    pub fn file(file: impl Into<String>) -> Self {
        Self::new(file, 0, 0)
    }

    pub const fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length == 0 && self.start == 0 {
            write!(f, "{}", self.file)
        } else {
            write!(f, "{}({}..{})", self.file, self.start, self.end())
        }
    }
}
