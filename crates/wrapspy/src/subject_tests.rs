// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use serde_json::json;

fn echo() -> Object {
    Object::new()
        .method("echo", |args| Ok(Value::Array(args.to_vec())))
        .method("fail", |_| Err(Failure::new("broken")))
        .with_field("version", json!(2))
}

#[test]
fn test_methods_in_declaration_order() {
    assert_eq!(echo().methods(), vec!["echo", "fail"]);
}

#[test]
fn test_call_dispatches_to_body() {
    let obj = echo();
    assert_eq!(
        obj.call("echo", &[json!(1), json!("a")]),
        Ok(json!([1, "a"]))
    );
}

#[test]
fn test_call_propagates_failure() {
    let err = echo().call("fail", &[]).unwrap_err();
    assert_eq!(err.message(), "broken");
}

#[test]
fn test_call_unknown_method_fails() {
    let err = echo().call("missing", &[]).unwrap_err();
    assert!(err.message().contains("missing"));
}

#[test]
fn test_redeclared_method_replaces_body() {
    let obj = Object::new()
        .method("greet", |_| Ok(json!("first")))
        .method("greet", |_| Ok(json!("second")));

    assert_eq!(obj.methods(), vec!["greet"]);
    assert_eq!(obj.call("greet", &[]), Ok(json!("second")));
}

#[test]
fn test_fields_are_not_methods() {
    let obj = echo();
    assert_eq!(obj.field("version"), Some(json!(2)));
    assert_eq!(obj.field("echo"), None);
    assert!(!obj.methods().contains(&"version".to_string()));
}

#[test]
fn test_arc_forwards() {
    let shared: Arc<dyn Subject> = Arc::new(echo());
    assert_eq!(shared.methods(), vec!["echo", "fail"]);
    assert_eq!(shared.call("echo", &[]), Ok(json!([])));
    assert_eq!(shared.field("version"), Some(json!(2)));
    assert!(shared.original().is_none());
}
