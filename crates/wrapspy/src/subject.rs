// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subjects: anything exposing named callable members.

use crate::error::{CallResult, Failure};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Something a wrapper can intercept.
///
/// A subject advertises its callable members by name and dispatches calls to
/// them with a dynamic argument list. Non-callable members may be exposed
/// through [`Subject::field`]; they are passed through without recording.
pub trait Subject: Send + Sync {
    /// Names of the callable members
    fn methods(&self) -> Vec<String>;

    /// Invoke a callable member
    fn call(&self, method: &str, args: &[Value]) -> CallResult;

    /// Read a non-callable member
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }

    /// The subject underneath, when this subject is itself a wrapper
    fn original(&self) -> Option<Arc<dyn Subject>> {
        None
    }
}

impl<T: Subject + ?Sized> Subject for Arc<T> {
    fn methods(&self) -> Vec<String> {
        (**self).methods()
    }

    fn call(&self, method: &str, args: &[Value]) -> CallResult {
        (**self).call(method, args)
    }

    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }

    fn original(&self) -> Option<Arc<dyn Subject>> {
        (**self).original()
    }
}

/// Method body stored on an [`Object`] or installed by `to_do_this`.
pub type Method = Arc<dyn Fn(&[Value]) -> CallResult + Send + Sync>;

/// A subject assembled from closures.
///
/// ```
/// use serde_json::json;
/// use wrapspy::{Object, Subject};
///
/// let person = Object::new()
///     .with_field("name", json!("non"))
///     .method("greet", |args| {
///         let other = args.first().and_then(|v| v.as_str()).unwrap_or_default();
///         Ok(json!(format!("non says hello to {other}")))
///     });
///
/// assert_eq!(
///     person.call("greet", &[json!("alice")]),
///     Ok(json!("non says hello to alice"))
/// );
/// assert_eq!(person.field("name"), Some(json!("non")));
/// ```
#[derive(Clone, Default)]
pub struct Object {
    methods: Vec<(String, Method)>,
    fields: BTreeMap<String, Value>,
}

impl Object {
    /// Create an object with no members
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a method; a later method with the same name replaces the earlier one
    pub fn method<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        let name = name.into();
        let body: Method = Arc::new(body);
        match self.methods.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = body,
            None => self.methods.push((name, body)),
        }
        self
    }

    /// Add a non-callable member
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

impl Subject for Object {
    fn methods(&self) -> Vec<String> {
        self.methods.iter().map(|(n, _)| n.clone()).collect()
    }

    fn call(&self, method: &str, args: &[Value]) -> CallResult {
        match self.methods.iter().find(|(n, _)| n == method) {
            Some((_, body)) => body(args),
            None => Err(Failure::new(format!("object has no method '{method}'"))),
        }
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("methods", &self.methods())
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
#[path = "subject_tests.rs"]
mod tests;
