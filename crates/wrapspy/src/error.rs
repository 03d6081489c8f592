// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure and error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result of calling a subject method or a replacement implementation.
pub type CallResult = Result<Value, Failure>;

/// A failure raised by a method call.
///
/// Real subject methods, replacement implementations and `to_throw` rules all
/// raise this same type, so a forced failure looks exactly like a genuine one
/// apart from its content.
#[derive(Clone, Debug, Error, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Failure {
    /// Human readable message
    pub message: String,

    /// Optional structured payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Failure {
    /// Create a failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach a structured payload
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Errors raised by wrapped instances and their expectation queries.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum WrapError {
    #[error("expected '{method}' to be called {expected} time(s) but it was called {actual} time(s)")]
    CountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error(
        "no call to '{method}' matched ({}); recorded calls: [{}]",
        render_args(.args),
        render_history(.history)
    )]
    NoMatchingInvocation {
        method: String,
        args: Vec<Value>,
        history: Vec<Vec<Value>>,
    },

    #[error("unknown method '{method}' (available: [{}])", .available.join(", "))]
    UnknownMethod {
        method: String,
        available: Vec<String>,
    },

    /// A call raised a failure, forced or genuine; carried through untouched
    #[error(transparent)]
    Failed(#[from] Failure),
}

impl WrapError {
    /// The call failure, if this error is one
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            WrapError::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_history(history: &[Vec<Value>]) -> String {
    history
        .iter()
        .map(|args| format!("({})", render_args(args)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
