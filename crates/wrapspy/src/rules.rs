// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Override rules and their resolution.

use crate::error::Failure;
use crate::subject::Method;
use serde_json::Value;
use std::collections::HashMap;
use wrapspy_capture::args_equal;

/// Which calls an override applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum Scope {
    /// Every call to the method
    Unconditional,
    /// Only calls whose arguments equal this tuple exactly
    Args(Vec<Value>),
}

impl Scope {
    fn matches(&self, args: &[Value]) -> bool {
        match self {
            Scope::Unconditional => true,
            Scope::Args(expected) => args_equal(expected, args),
        }
    }
}

/// What happens when a rule applies.
#[derive(Clone)]
pub enum Behavior {
    /// Call through to the subject
    Delegate,
    /// Return a canned value
    Return(Value),
    /// Run a replacement implementation with the call's arguments
    Do(Method),
    /// Raise a failure
    Throw(Failure),
}

impl Behavior {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Behavior::Delegate => "delegate",
            Behavior::Return(_) => "return",
            Behavior::Do(_) => "do",
            Behavior::Throw(_) => "throw",
        }
    }
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behavior::Delegate => f.write_str("Delegate"),
            Behavior::Return(v) => f.debug_tuple("Return").field(v).finish(),
            Behavior::Do(_) => f.write_str("Do(..)"),
            Behavior::Throw(failure) => f.debug_tuple("Throw").field(failure).finish(),
        }
    }
}

/// A stored instruction replacing default delegation for matching calls.
#[derive(Clone, Debug)]
pub struct OverrideRule {
    pub method: String,
    pub scope: Scope,
    pub behavior: Behavior,
}

impl OverrideRule {
    /// Rule applying to every call of `method`
    pub fn unconditional(method: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            method: method.into(),
            scope: Scope::Unconditional,
            behavior,
        }
    }

    /// Rule applying to calls of `method` with exactly `args`
    pub fn scoped(method: impl Into<String>, args: Vec<Value>, behavior: Behavior) -> Self {
        Self {
            method: method.into(),
            scope: Scope::Args(args),
            behavior,
        }
    }
}

/// Per-method override rules in registration order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: HashMap<String, Vec<OverrideRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule; it takes precedence over earlier rules of the same scope
    pub fn register(&mut self, rule: OverrideRule) {
        self.rules.entry(rule.method.clone()).or_default().push(rule);
    }

    /// Decide what a call to `method` with `args` should do.
    ///
    /// An argument-scoped rule matching `args` beats any unconditional rule
    /// regardless of registration order. Within a scope level the most
    /// recently registered rule wins. With no rule the call delegates.
    pub fn resolve(&self, method: &str, args: &[Value]) -> Behavior {
        let Some(rules) = self.rules.get(method) else {
            return Behavior::Delegate;
        };

        let scoped = rules
            .iter()
            .rev()
            .find(|r| matches!(r.scope, Scope::Args(_)) && r.scope.matches(args));
        let unconditional = || {
            rules
                .iter()
                .rev()
                .find(|r| r.scope == Scope::Unconditional)
        };

        scoped
            .or_else(unconditional)
            .map(|r| r.behavior.clone())
            .unwrap_or(Behavior::Delegate)
    }

    /// Rules registered for `method`, oldest first
    pub fn rules(&self, method: &str) -> &[OverrideRule] {
        self.rules.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of registered rules
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every rule
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
