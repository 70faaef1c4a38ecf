//! End-to-end tests for the transformation pipeline
//!
//! These tests drive the public API the way an embedding tool would: declare
//! rules as strings, attach lookup sources, and run inputs through.

use std::collections::HashMap;
use std::error::Error as _;
use textform_core::transform::{built_in, parse_rule, Handlers};
use textform_core::{
    Builtin, Error, Handler, Lookup, Rule, Transform, TransformConfig, TransformOption, SHELL_VAR,
};

fn names() -> Lookup {
    Lookup::from(HashMap::from([
        ("NAME".to_string(), "Ada".to_string()),
        ("LANG".to_string(), "Rust".to_string()),
    ]))
}

/// Test the canonical `${KEY}` expansion flow
#[test]
fn test_expand_hello() {
    let transform = Transform::new([
        TransformOption::lookups([names()]),
        TransformOption::string_rules([format!("expand:{}", SHELL_VAR)]),
    ])
    .expect("valid configuration");

    assert_eq!(transform.transform("Hello ${NAME}!").unwrap(), "Hello Ada!");
    assert_eq!(transform.transform("Hello world").unwrap(), "Hello world");

    let err = transform.transform("${MISSING}").unwrap_err();
    assert!(err.to_string().contains("MISSING"));
    assert!(matches!(
        err.root_cause(),
        Error::UnresolvedVariable { key } if key == "MISSING"
    ));
}

/// Test that every reference in one input is resolved in a single pass
#[test]
fn test_expand_multiple_references() {
    let transform = Transform::new([
        TransformOption::lookups([names()]),
        TransformOption::ExpandEnv,
    ])
    .unwrap();

    assert_eq!(
        transform.transform("${NAME} <3 ${LANG}, ${ NAME }!").unwrap(),
        "Ada <3 Rust, Ada!"
    );
}

/// Test that expanded values are not expanded again
#[test]
fn test_expansion_is_not_recursive() {
    let transform = Transform::new([
        TransformOption::lookups([Lookup::map([("OUTER", "${INNER}"), ("INNER", "x")])]),
        TransformOption::ExpandEnv,
    ])
    .unwrap();

    assert_eq!(transform.transform("${OUTER}").unwrap(), "${INNER}");
}

/// Test first-found-wins across ordered lookup sources
#[test]
fn test_lookup_precedence() {
    let empty: HashMap<String, String> = HashMap::new();
    let transform = Transform::new([
        TransformOption::lookups([Lookup::from(empty), Lookup::map([("X", "1")])]),
        TransformOption::ExpandEnv,
    ])
    .unwrap();

    assert_eq!(transform.transform("${X}").unwrap(), "1");
}

/// Test the rule-parsing error messages
#[test]
fn test_rule_parse_errors() {
    let transform = Transform::default();

    let err = transform.parse_string_rule("expand").unwrap_err();
    assert_eq!(err.to_string(), "expand: missing regex");

    let err = transform.parse_string_rule("expand:(?P<key>").unwrap_err();
    assert!(err.to_string().starts_with("regexp: (?P<key>"));
    assert!(err.source().is_some());

    let err = transform.parse_string_rule("bogus").unwrap_err();
    assert_eq!(err.to_string(), "unknown transform: bogus");
}

/// Test that `trim, upcase` declared as one string runs in order
#[test]
fn test_trim_upcase() {
    let mut transform = Transform::default();
    transform.add_string_rules(["trim, upcase"]).unwrap();
    assert_eq!(transform.transform("  hi  ").unwrap(), "HI");
}

/// Test normalization chain combining expansion and case rules
#[test]
fn test_normalization_chain() {
    let transform = Transform::new([
        TransformOption::lookups([Lookup::map([("ENV", "  Production ")])]),
        TransformOption::string_rules(["expand:@(?P<key>[A-Z]+)", "trim,downcase"]),
    ])
    .unwrap();

    assert_eq!(transform.transform("@ENV").unwrap(), "production");
}

/// Test a custom handler that fails inside a pipeline
#[test]
fn test_custom_handler_failure_is_wrapped() {
    let mut transform = Transform::default();
    transform.register_fn("digits", |s| {
        s.parse::<u64>()
            .map(|n| n.to_string())
            .map_err(Error::other)
    });
    transform.add_string_rules(["trim,digits"]).unwrap();

    assert_eq!(transform.transform(" 0042 ").unwrap(), "42");

    let err = transform.transform("forty-two").unwrap_err();
    assert!(err.is_rule_error());
    assert!(err.to_string().starts_with("rule: "));
    assert!(matches!(err.root_cause(), Error::Custom { .. }));
}

/// Test the free-standing parser against a caller-owned registry
#[test]
fn test_parse_rule_with_own_registry() {
    let mut handlers = Handlers::empty();
    handlers.register("shout", Some(Handler::custom(|s| Ok(built_in::upcase(s) + "!"))));

    let rule = parse_rule(&handlers, "SHOUT").unwrap();
    assert_eq!(rule.apply("hey", &[]).unwrap(), "HEY!");
    assert!(parse_rule(&handlers, "trim").is_err());
}

/// Test that rules display as the tags they were parsed from
#[test]
fn test_rule_display() {
    let transform = Transform::default();
    let rule = transform.parse_string_rule(" Capitalize ").unwrap();
    assert_eq!(rule.to_string(), "capitalize");

    let rule = transform.parse_string_rule("expand:<(?P<key>\\w+)>").unwrap();
    assert_eq!(rule.to_string(), "expand:<(?P<key>\\w+)>");

    assert_eq!(Rule::builtin(Builtin::Trim).to_string(), "trim");
}

/// Test a configuration shared read-only across threads
#[test]
fn test_shared_read_only_use() {
    let transform = std::sync::Arc::new(
        TransformConfig::from_json(r#"{"rules": ["upcase"]}"#)
            .unwrap()
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let transform = transform.clone();
            std::thread::spawn(move || transform.transform(&format!("t{}", i)).unwrap())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["T0", "T1", "T2", "T3"]);
}
