use routegen_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use routegen_common::{Diagnostic, SourceLocation};

use super::reporter::Reporter;

fn conflict(location: Option<SourceLocation>) -> Diagnostic {
    Diagnostic::from_template(
        diagnostic_codes::CONFLICTING_METHODS,
        diagnostic_messages::CONFLICTING_METHODS,
        &["HomeController", "Index(int)"],
        location,
    )
}

#[test]
fn formats_diagnostic_without_location() {
    let mut reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_diagnostic(&conflict(None)),
        "routegen - error RG0001: The class 'HomeController' contains multiple methods which map to the route method 'Index(int)'."
    );
}

#[test]
fn whole_file_location_renders_file_only() {
    let mut reporter = Reporter::new(false);
    let rendered = reporter.format_diagnostic(&conflict(Some(SourceLocation::file("Pages/Index.cshtml.cs"))));
    assert!(rendered.starts_with("Pages/Index.cshtml.cs - error RG0001: "));
}

#[test]
fn unreadable_file_falls_back_to_span() {
    let mut reporter = Reporter::new(false);
    let rendered = reporter.format_diagnostic(&conflict(Some(SourceLocation::new(
        "does/not/exist.cs",
        12,
        5,
    ))));
    assert!(rendered.starts_with("does/not/exist.cs(12..17) - error"));
}

#[test]
fn readable_file_gets_line_and_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HomeController.cs");
    std::fs::write(&path, "class HomeController\n{\n    public void Index() {}\n}\n").unwrap();
    let file = path.to_str().unwrap();
    let offset = "class HomeController\n{\n    public void ".len() as u32;

    let mut reporter = Reporter::new(false);
    let rendered = reporter.format_diagnostic(&conflict(Some(SourceLocation::new(file, offset, 5))));
    assert!(rendered.starts_with(&format!("{file}:3:17 - error RG0001")));
}

#[test]
fn renders_multiple_diagnostics_on_separate_lines() {
    let mut reporter = Reporter::new(false);
    let rendered = reporter.render(&[conflict(None), conflict(None)]);
    assert_eq!(rendered.lines().count(), 2);
}

#[test]
fn summary_pluralizes() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.summary(1), "Found 1 error.");
    assert_eq!(reporter.summary(3), "Found 3 errors.");
}
