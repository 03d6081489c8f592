// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recorded invocation facts.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, SystemTime};

/// A single call observed through a wrapped method.
///
/// Invocations are created by [`crate::InvocationLedger::record`] and handed
/// out as owned snapshots, so the ledger's copy never changes after the fact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Invocation {
    /// Name of the method that was called
    pub method: String,

    /// Arguments in call order
    pub args: Vec<Value>,

    /// Position among calls to the same method, starting at 0
    pub index: u64,

    /// Position among all calls recorded by the ledger, starting at 0
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the ledger was created
    pub elapsed: Duration,
}

impl Invocation {
    /// Whether this call was made with exactly `args`.
    ///
    /// Arguments compare element-wise with [`values_equal`] and the lengths
    /// must match.
    pub fn matches_args(&self, args: &[Value]) -> bool {
        args_equal(&self.args, args)
    }
}

/// Element-wise [`values_equal`] over two argument lists of the same length.
pub fn args_equal(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| values_equal(l, r))
}

/// Structural equality where numbers compare by numeric value.
///
/// `2` and `2.0` are equal; strings, booleans and null compare exactly;
/// arrays and objects recurse, and object key order does not matter.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => {
            l == r || matches!((l.as_f64(), r.as_f64()), (Some(a), Some(b)) if a == b)
        }
        (Value::Array(l), Value::Array(r)) => args_equal(l, r),
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, value)| r.get(key).is_some_and(|other| values_equal(value, other)))
        }
        _ => left == right,
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
