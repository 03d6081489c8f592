// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The intercepting wrapper.

use crate::error::{CallResult, Failure, WrapError};
use crate::expect::Expectation;
use crate::rules::{Behavior, OverrideRule, RuleSet};
use crate::subject::Subject;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};
use wrapspy_capture::InvocationLedger;

/// Wrap a subject so that calls through the result are recorded and can be
/// overridden.
///
/// Every call allocates a fresh ledger and rule set. Wrapping something that
/// is already a [`Wrapped`] starts over from the underlying subject, so no
/// calls or overrides carry across wraps.
pub fn wrap<S: Subject + 'static>(subject: S) -> Wrapped {
    let subject: Arc<dyn Subject> = match subject.original() {
        Some(inner) => inner,
        None => Arc::new(subject),
    };
    Wrapped::new(subject)
}

/// Handle onto an intercepted subject.
///
/// Clones share one ledger and one rule set; use [`wrap`] for an independent
/// instance.
///
/// A replacement installed with `to_do_this` that captures a clone of its own
/// wrapper forms a reference cycle: the wrapper, its subject and its history
/// then stay alive until the process exits.
#[derive(Clone)]
pub struct Wrapped {
    subject: Arc<dyn Subject>,
    methods: Arc<Vec<String>>,
    ledger: InvocationLedger,
    rules: Arc<Mutex<RuleSet>>,
}

impl Wrapped {
    fn new(subject: Arc<dyn Subject>) -> Self {
        let methods = subject.methods();
        debug!(target: "wrapspy", ?methods, "wrapped subject");
        Self {
            subject,
            methods: Arc::new(methods),
            ledger: InvocationLedger::new(),
            rules: Arc::new(Mutex::new(RuleSet::new())),
        }
    }

    /// Call a method through the interceptor.
    ///
    /// The call is recorded before any override runs, so it is counted even
    /// when the resolved behavior fails. Failures from the subject, from a
    /// replacement implementation or from a `to_throw` rule come back as
    /// [`WrapError::Failed`] unchanged.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value, WrapError> {
        self.ensure_method(method)?;

        let invocation = self.ledger.record(method, args);
        trace!(target: "wrapspy", method, index = invocation.index, "recorded call");

        // Lock released before any behavior runs so replacements can re-enter.
        let behavior = self.rules.lock().resolve(method, args);
        debug!(target: "wrapspy", method, behavior = behavior.kind(), "resolved call");

        let result = match behavior {
            Behavior::Delegate => self.subject.call(method, args),
            Behavior::Return(value) => Ok(value),
            Behavior::Do(body) => body(args),
            Behavior::Throw(failure) => Err(failure),
        };
        result.map_err(WrapError::from)
    }

    /// Read a non-callable member of the subject; not recorded
    pub fn field(&self, name: &str) -> Option<Value> {
        self.subject.field(name)
    }

    /// Names of the intercepted methods
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Whether the subject exposes `method`
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Expectations and overrides for one method
    pub fn expect(&self, method: &str) -> Result<Expectation<'_>, WrapError> {
        self.ensure_method(method)?;
        Ok(Expectation::new(self, method))
    }

    /// Install an override rule directly
    pub fn register(&self, rule: OverrideRule) -> Result<(), WrapError> {
        self.ensure_method(&rule.method)?;
        self.install(rule);
        Ok(())
    }

    /// Install a rule whose method is already known to exist
    pub(crate) fn install(&self, rule: OverrideRule) {
        debug_assert!(self.has_method(&rule.method));
        debug!(
            target: "wrapspy",
            method = %rule.method,
            scope = ?rule.scope,
            behavior = rule.behavior.kind(),
            "registered override"
        );
        self.rules.lock().register(rule);
    }

    /// Snapshot of the rules registered for `method`, oldest first
    pub fn rules(&self, method: &str) -> Vec<OverrideRule> {
        self.rules.lock().rules(method).to_vec()
    }

    /// The call history of this instance
    pub fn ledger(&self) -> &InvocationLedger {
        &self.ledger
    }

    pub(crate) fn ensure_method(&self, method: &str) -> Result<(), WrapError> {
        if self.has_method(method) {
            Ok(())
        } else {
            Err(WrapError::UnknownMethod {
                method: method.to_string(),
                available: self.methods.to_vec(),
            })
        }
    }
}

impl Subject for Wrapped {
    fn methods(&self) -> Vec<String> {
        self.methods.to_vec()
    }

    fn call(&self, method: &str, args: &[Value]) -> CallResult {
        Wrapped::call(self, method, args).map_err(|e| match e {
            WrapError::Failed(failure) => failure,
            other => Failure::new(other.to_string()),
        })
    }

    fn field(&self, name: &str) -> Option<Value> {
        Wrapped::field(self, name)
    }

    fn original(&self) -> Option<Arc<dyn Subject>> {
        Some(Arc::clone(&self.subject))
    }
}

impl std::fmt::Debug for Wrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapped")
            .field("methods", &self.methods)
            .field("calls", &self.ledger.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "wrapped_tests.rs"]
mod tests;
