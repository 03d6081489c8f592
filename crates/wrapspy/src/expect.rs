// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-method expectation queries and override builders.

use crate::error::{CallResult, Failure, WrapError};
use crate::rules::{Behavior, OverrideRule};
use crate::wrapped::Wrapped;
use serde_json::Value;
use std::sync::Arc;
use wrapspy_capture::Invocation;

/// Queries and overrides for one method of a [`Wrapped`] instance.
///
/// Obtained from [`Wrapped::expect`], which has already checked that the
/// method exists.
pub struct Expectation<'a> {
    wrapped: &'a Wrapped,
    method: String,
}

impl<'a> Expectation<'a> {
    pub(crate) fn new(wrapped: &'a Wrapped, method: &str) -> Self {
        Self {
            wrapped,
            method: method.to_string(),
        }
    }

    /// The method these expectations are about
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Queries over the recorded calls
    pub fn called(&self) -> Called<'a> {
        Called {
            wrapped: self.wrapped,
            method: self.method.clone(),
        }
    }

    /// Return `value` from every call
    pub fn to_return(&self, value: impl Into<Value>) -> &Self {
        self.install(Behavior::Return(value.into()));
        self
    }

    /// Run `body` in place of the subject's method on every call
    pub fn to_do_this<F>(&self, body: F) -> &Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        self.install(Behavior::Do(Arc::new(body)));
        self
    }

    /// Raise a failure built from `failure` on every call
    pub fn to_throw(&self, failure: impl Into<Failure>) -> &Self {
        self.install(Behavior::Throw(failure.into()));
        self
    }

    /// Call through to the subject, shadowing earlier unconditional overrides
    pub fn to_delegate(&self) -> &Self {
        self.install(Behavior::Delegate);
        self
    }

    /// Overrides that only apply to calls made with exactly `args`
    pub fn when(&self, args: &[Value]) -> When<'a> {
        When {
            wrapped: self.wrapped,
            method: self.method.clone(),
            args: args.to_vec(),
        }
    }

    fn install(&self, behavior: Behavior) {
        // The method was checked by `Wrapped::expect`.
        self.wrapped
            .install(OverrideRule::unconditional(self.method.clone(), behavior));
    }
}

/// Argument-scoped override builder returned by [`Expectation::when`].
pub struct When<'a> {
    wrapped: &'a Wrapped,
    method: String,
    args: Vec<Value>,
}

impl When<'_> {
    /// Return `value` when called with the scoped arguments
    pub fn to_return(&self, value: impl Into<Value>) -> &Self {
        self.install(Behavior::Return(value.into()));
        self
    }

    /// Run `body` when called with the scoped arguments
    pub fn to_do_this<F>(&self, body: F) -> &Self
    where
        F: Fn(&[Value]) -> CallResult + Send + Sync + 'static,
    {
        self.install(Behavior::Do(Arc::new(body)));
        self
    }

    /// Raise a failure when called with the scoped arguments
    pub fn to_throw(&self, failure: impl Into<Failure>) -> &Self {
        self.install(Behavior::Throw(failure.into()));
        self
    }

    /// Call through to the subject when called with the scoped arguments
    pub fn to_delegate(&self) -> &Self {
        self.install(Behavior::Delegate);
        self
    }

    fn install(&self, behavior: Behavior) {
        self.wrapped.install(OverrideRule::scoped(
            self.method.clone(),
            self.args.clone(),
            behavior,
        ));
    }
}

/// Read-only queries over the calls recorded for one method.
pub struct Called<'a> {
    wrapped: &'a Wrapped,
    method: String,
}

impl Called<'_> {
    /// Number of recorded calls
    pub fn count(&self) -> usize {
        self.wrapped.ledger().count(&self.method)
    }

    /// Recorded calls, oldest first
    pub fn invocations(&self) -> Vec<Invocation> {
        self.wrapped.ledger().calls(&self.method)
    }

    /// Succeeds iff the method was called exactly `expected` times
    pub fn times(&self, expected: usize) -> Result<(), WrapError> {
        let actual = self.count();
        if actual == expected {
            Ok(())
        } else {
            Err(WrapError::CountMismatch {
                method: self.method.clone(),
                expected,
                actual,
            })
        }
    }

    /// Succeeds iff the method was never called
    pub fn never(&self) -> Result<(), WrapError> {
        self.times(0)
    }

    /// Succeeds iff the method was called exactly once
    pub fn once(&self) -> Result<(), WrapError> {
        self.times(1)
    }

    /// Succeeds iff at least one call was made with exactly `args`
    pub fn with_args(&self, args: &[Value]) -> Result<(), WrapError> {
        let ledger = self.wrapped.ledger();
        if ledger.was_called_with(&self.method, args) {
            Ok(())
        } else {
            Err(WrapError::NoMatchingInvocation {
                method: self.method.clone(),
                args: args.to_vec(),
                history: ledger.history(&self.method),
            })
        }
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
