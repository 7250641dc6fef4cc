use colored::Colorize;
use rustc_hash::FxHashMap;
use std::path::Path;

use routegen_common::{Diagnostic, DiagnosticCategory, SourceLocation};

/// Renders diagnostics as `file:line:column - error RG0001: message`.
///
/// Source files are read lazily to turn byte offsets into line and column;
/// a file that cannot be read falls back to its raw span.
pub struct Reporter {
    color: bool,
    sources: FxHashMap<String, Option<String>>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: FxHashMap::default(),
        }
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = match &diagnostic.location {
            Some(location) => self.format_location(location),
            None => "routegen".to_string(),
        };
        let category = self.format_category(diagnostic.category);
        let code = self.format_code(&diagnostic.code_text());

        format!("{location} - {category} {code}: {}", diagnostic.message_text)
    }

    pub fn summary(&self, count: usize) -> String {
        let text = match count {
            1 => "Found 1 error.".to_string(),
            _ => format!("Found {count} errors."),
        };
        if self.color { text.bold().to_string() } else { text }
    }

    fn format_location(&mut self, location: &SourceLocation) -> String {
        if location.start == 0 && location.length == 0 {
            return location.file.clone();
        }
        match self.position_for(&location.file, location.start) {
            Some((line, column)) => format!("{}:{line}:{column}", location.file),
            None => location.to_string(),
        }
    }

    fn position_for(&mut self, file: &str, offset: u32) -> Option<(usize, usize)> {
        let source = self
            .sources
            .entry(file.to_string())
            .or_insert_with(|| std::fs::read_to_string(Path::new(file)).ok())
            .as_deref()?;
        let prefix = source.get(..offset as usize)?;
        let line = prefix.matches('\n').count() + 1;
        let column = prefix.rsplit('\n').next().map_or(0, |text| text.chars().count()) + 1;
        Some((line, column))
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }

    fn format_code(&self, code: &str) -> String {
        if self.color {
            code.bright_blue().to_string()
        } else {
            code.to_string()
        }
    }
}
