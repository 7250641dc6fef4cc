use routegen_common::diagnostics::diagnostic_codes;

use crate::options::*;

#[test]
fn test_defaults_without_entries() {
    let options = GeneratorOptions::from_entries(Vec::<(&str, &str)>::new());
    assert_eq!(options.access_modifier, AccessModifier::Public);
    assert_eq!(options.root_namespace, DEFAULT_NAMESPACE);
    assert_eq!(options.parameter_case, ParameterCase::Standard);
    assert!(options.diagnostics.is_empty());
    assert_eq!(options, GeneratorOptions::default());
}

#[test]
fn test_valid_values_are_applied() {
    let options = GeneratorOptions::from_entries([
        (ACCESS_MODIFIER_OPTION, "internal"),
        (NAMESPACE_OPTION, "My.Routes"),
        (PARAMETER_CASE_OPTION, "pascal"),
        ("build_property.unrelated", "whatever"),
    ]);
    assert_eq!(options.access_modifier, AccessModifier::Internal);
    assert_eq!(options.root_namespace, "My.Routes");
    assert_eq!(options.parameter_case, ParameterCase::Pascal);
    assert!(options.diagnostics.is_empty());
}

#[test]
fn test_invalid_values_keep_defaults_and_report() {
    let options = GeneratorOptions::from_entries([
        (ACCESS_MODIFIER_OPTION, "private"),
        (NAMESPACE_OPTION, "x.1nvalid Namespace,[]!"),
        (PARAMETER_CASE_OPTION, "Pascal"),
    ]);
    assert_eq!(options.access_modifier, AccessModifier::Public);
    assert_eq!(options.root_namespace, DEFAULT_NAMESPACE);
    assert_eq!(options.parameter_case, ParameterCase::Standard);

    let messages: Vec<&str> = options.diagnostics.iter().map(|d| d.message_text.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Value for the option 'route_generator.generated_access_modifier' is invalid. 'private' is not a supported access modifier, must be public or internal.",
            "Value for the option 'route_generator.generated_namespace' is invalid. 'x.1nvalid Namespace,[]!' is not a valid namespace identifier.",
            "Value for the option 'route_generator.generated_parameter_case' is invalid. 'Pascal' is not a supported parameter case, must be standard or pascal.",
        ]
    );
    assert!(
        options
            .diagnostics
            .iter()
            .all(|d| d.code == diagnostic_codes::INVALID_OPTION && d.location.is_none())
    );
}

#[test]
fn test_one_invalid_option_does_not_affect_others() {
    let options = GeneratorOptions::from_entries([
        (ACCESS_MODIFIER_OPTION, "internal"),
        (NAMESPACE_OPTION, ""),
    ]);
    assert_eq!(options.access_modifier, AccessModifier::Internal);
    assert_eq!(options.root_namespace, DEFAULT_NAMESPACE);
    assert_eq!(options.diagnostics.len(), 1);
}

#[test]
fn test_last_entry_wins() {
    let options = GeneratorOptions::from_entries([
        (PARAMETER_CASE_OPTION, "bogus"),
        (PARAMETER_CASE_OPTION, "pascal"),
    ]);
    assert_eq!(options.parameter_case, ParameterCase::Pascal);
    assert!(options.diagnostics.is_empty());
}

#[test]
fn test_serialized_without_diagnostics() {
    let json = serde_json::to_value(GeneratorOptions::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "access_modifier": "public",
            "root_namespace": "Routes",
            "parameter_case": "standard"
        })
    );
}
