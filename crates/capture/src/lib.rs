// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation capture for test doubles.
//!
//! This crate records the calls made through a wrapped subject so that tests
//! can ask how often a method ran and with which arguments. It knows nothing
//! about overrides; see the `wrapspy` crate for the interceptor.

mod invocation;
mod ledger;

pub use invocation::{args_equal, values_equal, Invocation};
pub use ledger::InvocationLedger;
