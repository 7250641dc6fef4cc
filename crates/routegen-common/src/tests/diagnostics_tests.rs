use crate::diagnostics::*;
use crate::location::SourceLocation;

#[test]
fn test_format_message_substitutes_positional_arguments() {
    let message = format_message(
        diagnostic_messages::CONFLICTING_METHODS,
        &["ProductsController", "Index(int)"],
    );
    assert_eq!(
        message,
        "The class 'ProductsController' contains multiple methods which map to the route method 'Index(int)'."
    );
}

#[test]
fn test_every_code_has_a_template_and_title() {
    for code in [
        diagnostic_codes::CONFLICTING_METHODS,
        diagnostic_codes::INVALID_OPTION,
        diagnostic_codes::INVALID_IDENTIFIER,
        diagnostic_codes::CONFLICTING_CONTROLLER,
        diagnostic_codes::CONFLICTING_PAGE_CLASS,
    ] {
        assert!(get_message_template(code).is_some(), "missing template for {code}");
        assert!(get_message_title(code).is_some(), "missing title for {code}");
    }
    assert!(get_message_template(999).is_none());
}

#[test]
fn test_diagnostic_display_includes_code_and_location() {
    let diagnostic = Diagnostic::from_template(
        diagnostic_codes::INVALID_IDENTIFIER,
        diagnostic_messages::INVALID_IDENTIFIER,
        &["1x"],
        Some(SourceLocation::new("Controllers/Home.cs", 10, 5)),
    );
    assert_eq!(diagnostic.code_text(), "RG0003");
    assert_eq!(
        diagnostic.to_string(),
        "Controllers/Home.cs(10..15) - error RG0003: The text '1x' is not a valid identifier."
    );
}

#[test]
fn test_diagnostic_without_location_serializes_without_field() {
    let diagnostic = Diagnostic::error(diagnostic_codes::INVALID_OPTION, "bad", None);
    let json = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(json["category"], "error");
    assert!(json.get("location").is_none());
}
