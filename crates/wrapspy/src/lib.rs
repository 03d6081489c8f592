// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Call-recording test doubles.
//!
//! [`wrap`] puts an interceptor in front of any [`Subject`]: every call made
//! through the returned [`Wrapped`] handle is recorded, and per-method
//! overrides can replace what the call does. [`stub`] builds a bare subject
//! from method names when there is no real implementation yet.
//!
//! ```
//! use serde_json::json;
//! use wrapspy::{stub, wrap};
//!
//! let bob = wrap(stub(["greet"]));
//! let greet = bob.expect("greet")?;
//! greet.when(&[json!("alice")]).to_return("foobar");
//! greet.to_return("barfoo");
//!
//! assert_eq!(bob.call("greet", &[json!("alice")])?, json!("foobar"));
//! assert_eq!(bob.call("greet", &[json!("bob")])?, json!("barfoo"));
//!
//! greet.called().times(2)?;
//! greet.called().with_args(&[json!("bob")])?;
//! assert!(greet.called().with_args(&[json!("carol")]).is_err());
//! # Ok::<(), wrapspy::WrapError>(())
//! ```
//!
//! Override precedence for a call is: the latest rule registered with
//! `when(args)` for exactly those arguments, then the latest unconditional
//! rule, then the subject itself.

pub mod config;
mod error;
mod expect;
pub mod rules;
pub mod scenario;
mod stub;
mod subject;
mod wrapped;

pub use config::{RuleSpec, ScenarioConfig, ThrowSpec};
pub use error::{CallResult, Failure, WrapError};
pub use expect::{Called, Expectation, When};
pub use rules::{Behavior, OverrideRule, RuleSet, Scope};
pub use scenario::{Scenario, ScenarioError};
pub use stub::{stub, Stub};
pub use subject::{Method, Object, Subject};
pub use wrapped::{wrap, Wrapped};

/// Re-exported ledger types from wrapspy-capture crate.
pub mod capture {
    pub use wrapspy_capture::{args_equal, values_equal, Invocation, InvocationLedger};
}
