use crate::identifiers::*;

#[test]
fn test_simple_identifiers_are_valid() {
    for name in ["a", "A", "_", "_private", "Get2", "camelCaseRenamedD", "j0"] {
        assert!(is_valid_identifier(name), "{name} should be valid");
    }
}

#[test]
fn test_unicode_identifier_categories_are_valid() {
    // Nl start, Mn / Mc / Pc / Cf parts
    for name in ["\u{16EF}", "e\u{0300}", "a\u{0903}b", "k\u{203F}a", "l\u{00AD}a"] {
        assert!(is_valid_identifier(name), "{name:?} should be valid");
    }
}

#[test]
fn test_invalid_identifiers_are_rejected() {
    for name in ["", "1abc", "a b", "a-b", "a.b", "@class", "!", "x,y"] {
        assert!(!is_valid_identifier(name), "{name:?} should be invalid");
    }
}

#[test]
fn test_keywords_are_valid_but_escaped() {
    assert!(is_valid_identifier("class"));
    assert_eq!(escape_identifier("class"), "@class");
    assert_eq!(escape_identifier("var"), "@var");
    assert_eq!(escape_identifier("Index"), "Index");
}

#[test]
fn test_namespace_validation_checks_each_segment() {
    assert!(is_valid_namespace("Routes"));
    assert!(is_valid_namespace("Test.Namespace"));
    assert!(!is_valid_namespace("x.1nvalid Namespace,[]!"));
    assert!(!is_valid_namespace("Trailing."));
    assert!(!is_valid_namespace(""));
}

#[test]
fn test_case_conversion_touches_first_character_only() {
    assert_eq!(camel_to_pascal_case("camelCaseRenamedD"), "CamelCaseRenamedD");
    assert_eq!(camel_to_pascal_case("x"), "X");
    assert_eq!(camel_to_pascal_case(""), "");
    assert_eq!(pascal_to_camel_case("RenamedC"), "renamedC");
    assert_eq!(pascal_to_camel_case("ID"), "iD");
    assert_eq!(pascal_to_camel_case("_"), "_");
}
