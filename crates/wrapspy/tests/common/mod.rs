// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared subjects and helpers for integration tests.

use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use wrapspy::{stub, Object, Subject};

/// A person who greets others by name
pub fn person(name: &'static str) -> Object {
    Object::new().method("greet", move |args| {
        let other = args.first().and_then(Value::as_str).unwrap_or_default();
        Ok(json!(format!("{name} says hello to {other}")))
    })
}

/// The two kinds of subject every behavior is checked against
pub fn subjects() -> Vec<(&'static str, Arc<dyn Subject>)> {
    vec![
        ("stub", Arc::new(stub(["greet"]))),
        ("person", Arc::new(person("non"))),
    ]
}

/// Create a temporary scenario file
/// Detects JSON vs TOML content and uses appropriate extension
pub fn write_scenario(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');

    let mut file = if is_json {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    } else {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    };

    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
