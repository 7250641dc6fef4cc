use clap::Parser;
use std::path::PathBuf;

use super::args::{CliArgs, ColorChoice};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["routegen", "dumps"]).expect("default args should parse");

    assert_eq!(args.inputs, vec![PathBuf::from("dumps")]);
    assert!(args.config.is_none());
    assert!(args.options.is_empty());
    assert!(args.out.is_none());
    assert!(!args.compact);
    assert!(!args.no_emit);
    assert_eq!(args.color, ColorChoice::Auto);
}

#[test]
fn requires_an_input() {
    assert!(CliArgs::try_parse_from(["routegen"]).is_err());
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "routegen",
        "--config",
        "routegen.json",
        "--option",
        "route_generator.generated_namespace=App.Routes",
        "--option",
        "route_generator.generated_parameter_case=pascal",
        "--out",
        "model.json",
        "--compact",
        "--no-emit",
        "--color",
        "never",
        "a.json",
        "b",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.config.as_deref(), Some(std::path::Path::new("routegen.json")));
    assert_eq!(
        args.options,
        vec![
            (
                "route_generator.generated_namespace".to_string(),
                "App.Routes".to_string()
            ),
            (
                "route_generator.generated_parameter_case".to_string(),
                "pascal".to_string()
            ),
        ]
    );
    assert_eq!(args.out.as_deref(), Some(std::path::Path::new("model.json")));
    assert!(args.compact);
    assert!(args.no_emit);
    assert_eq!(args.color, ColorChoice::Never);
    assert_eq!(args.inputs, vec![PathBuf::from("a.json"), PathBuf::from("b")]);
}

#[test]
fn option_values_may_contain_equals_or_be_empty() {
    let args = CliArgs::try_parse_from(["routegen", "--option", "key=a=b", "--option", "other=", "in"])
        .expect("options should parse");
    assert_eq!(
        args.options,
        vec![
            ("key".to_string(), "a=b".to_string()),
            ("other".to_string(), String::new()),
        ]
    );
}

#[test]
fn rejects_malformed_options() {
    assert!(CliArgs::try_parse_from(["routegen", "--option", "no-separator", "in"]).is_err());
    assert!(CliArgs::try_parse_from(["routegen", "--option", "=value", "in"]).is_err());
}
