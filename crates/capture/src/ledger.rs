// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation ledger implementation.

use crate::invocation::Invocation;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

#[derive(Default)]
struct LedgerState {
    invocations: Vec<Invocation>,
    per_method: HashMap<String, u64>,
}

/// Ordered history of calls made through one wrapped instance.
///
/// Cloning the ledger yields another handle onto the same history.
pub struct InvocationLedger {
    start: Instant,
    state: Arc<Mutex<LedgerState>>,
}

impl InvocationLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            state: Arc::new(Mutex::new(LedgerState::default())),
        }
    }

    /// Record a call and return the stored invocation
    pub fn record(&self, method: &str, args: &[Value]) -> Invocation {
        let mut state = self.state.lock();
        let seq = state.invocations.len() as u64;
        let next = state.per_method.entry(method.to_string()).or_insert(0);
        let index = *next;
        *next += 1;

        let invocation = Invocation {
            method: method.to_string(),
            args: args.to_vec(),
            index,
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
        };
        state.invocations.push(invocation.clone());
        invocation
    }

    /// Get every recorded invocation in call order
    pub fn all(&self) -> Vec<Invocation> {
        self.state.lock().invocations.clone()
    }

    /// Get the invocations of one method in call order
    pub fn calls(&self, method: &str) -> Vec<Invocation> {
        self.state
            .lock()
            .invocations
            .iter()
            .filter(|i| i.method == method)
            .cloned()
            .collect()
    }

    /// Number of times `method` was called
    pub fn count(&self, method: &str) -> usize {
        self.state
            .lock()
            .per_method
            .get(method)
            .copied()
            .unwrap_or(0) as usize
    }

    /// Argument lists of every call to `method`, oldest first
    pub fn history(&self, method: &str) -> Vec<Vec<Value>> {
        self.state
            .lock()
            .invocations
            .iter()
            .filter(|i| i.method == method)
            .map(|i| i.args.clone())
            .collect()
    }

    /// Whether `method` was ever called with exactly `args`
    pub fn was_called_with(&self, method: &str, args: &[Value]) -> bool {
        self.state
            .lock()
            .invocations
            .iter()
            .any(|i| i.method == method && i.matches_args(args))
    }

    /// Get the last N invocations across all methods
    pub fn last(&self, n: usize) -> Vec<Invocation> {
        let state = self.state.lock();
        state.invocations.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count invocations matching a predicate
    pub fn count_where<F: Fn(&Invocation) -> bool>(&self, pred: F) -> usize {
        self.state.lock().invocations.iter().filter(|i| pred(i)).count()
    }

    /// Get the total number of invocations
    pub fn len(&self) -> usize {
        self.state.lock().invocations.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.state.lock().invocations.is_empty()
    }

    /// Forget all recorded invocations; per-method indices restart at 0
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.invocations.clear();
        state.per_method.clear();
    }
}

impl Default for InvocationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InvocationLedger {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            state: Arc::clone(&self.state),
        }
    }
}

impl std::fmt::Debug for InvocationLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvocationLedger")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
