// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;

#[test]
fn test_parse_simple_scenario() {
    let toml_str = r#"
name = "greeter"
methods = ["greet", "wave"]

[[rules]]
method = "greet"
when = ["alice"]
returns = "foobar"

[[rules]]
method = "greet"
returns = "barfoo"
"#;
    let config: ScenarioConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.name, "greeter");
    assert_eq!(config.methods, vec!["greet", "wave"]);
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].when, Some(vec![json!("alice")]));
    assert_eq!(config.rules[1].returns, Some(json!("barfoo")));
    assert!(config.rules[1].when.is_none());
}

#[test]
fn test_parse_structured_values() {
    let toml_str = r#"
[[rules]]
method = "lookup"
when = [1, { id = "a" }]
returns = { found = true, tags = ["x", "y"] }
"#;
    let config: ScenarioConfig = toml::from_str(toml_str).unwrap();
    let rule = &config.rules[0];
    assert_eq!(rule.when, Some(vec![json!(1), json!({"id": "a"})]));
    assert_eq!(rule.returns, Some(json!({"found": true, "tags": ["x", "y"]})));
}

#[test]
fn test_parse_throw_message() {
    let toml_str = r#"
[[rules]]
method = "greet"
throws = "BANG"
"#;
    let config: ScenarioConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.rules[0].throws,
        Some(ThrowSpec::Message("BANG".to_string()))
    );
}

#[test]
fn test_parse_throw_detailed() {
    let toml_str = r#"
[[rules]]
method = "greet"
throws = { message = "rate limited", detail = { retry_after = 60 } }
"#;
    let config: ScenarioConfig = toml::from_str(toml_str).unwrap();
    let failure: Failure = config.rules[0].throws.clone().unwrap().into();
    assert_eq!(failure.message(), "rate limited");
    assert_eq!(failure.detail, Some(json!({"retry_after": 60})));
}

#[test]
fn test_parse_json_scenario() {
    let json_str = r#"{
        "name": "json",
        "rules": [{ "method": "greet", "delegate": true }]
    }"#;
    let config: ScenarioConfig = serde_json::from_str(json_str).unwrap();
    assert!(config.rules[0].delegate);
    assert!(config.methods.is_empty());
}

#[test]
fn test_unknown_fields_rejected() {
    let toml_str = r#"
[[rules]]
method = "greet"
return = "typo"
"#;
    assert!(toml::from_str::<ScenarioConfig>(toml_str).is_err());
}

#[test]
fn test_rule_requires_method() {
    let toml_str = r#"
[[rules]]
returns = 1
"#;
    assert!(toml::from_str::<ScenarioConfig>(toml_str).is_err());
}
