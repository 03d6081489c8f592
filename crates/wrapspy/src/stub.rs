// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bare stubs declared by method name.

use crate::error::{CallResult, Failure};
use crate::subject::Subject;
use serde_json::Value;

/// A subject with a fixed set of no-op methods.
///
/// Every declared method returns `null` until a wrapper overrides it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stub {
    methods: Vec<String>,
}

/// Create a stub exposing `names` as methods.
///
/// Duplicate names collapse to a single method; the first declaration fixes
/// its position in [`Subject::methods`].
pub fn stub<I, S>(names: I) -> Stub
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut methods: Vec<String> = Vec::new();
    for name in names {
        let name = name.into();
        if !methods.contains(&name) {
            methods.push(name);
        }
    }
    Stub { methods }
}

impl Stub {
    /// Whether `name` was declared
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }
}

impl Subject for Stub {
    fn methods(&self) -> Vec<String> {
        self.methods.clone()
    }

    fn call(&self, method: &str, _args: &[Value]) -> CallResult {
        if self.has_method(method) {
            Ok(Value::Null)
        } else {
            Err(Failure::new(format!("stub has no method '{method}'")))
        }
    }
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
