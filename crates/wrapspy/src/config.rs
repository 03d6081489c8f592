// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario configuration types for TOML/JSON scenario files.

use crate::error::Failure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level scenario configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// Method names for [`crate::Scenario::stub`].
    /// When non-empty, every rule must target one of these.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Override rules, applied in file order
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// A single override rule
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// Method the rule targets
    pub method: String,

    /// Restrict the rule to calls with exactly these arguments
    #[serde(default)]
    pub when: Option<Vec<Value>>,

    /// Canned return value
    #[serde(default)]
    pub returns: Option<Value>,

    /// Failure to raise instead of returning
    #[serde(default)]
    pub throws: Option<ThrowSpec>,

    /// Explicitly call through to the subject
    #[serde(default)]
    pub delegate: bool,
}

/// Failure specification, either a bare message or a detailed table
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ThrowSpec {
    Message(String),
    Detailed {
        message: String,
        #[serde(default)]
        detail: Option<Value>,
    },
}

impl From<ThrowSpec> for Failure {
    fn from(spec: ThrowSpec) -> Self {
        match spec {
            ThrowSpec::Message(message) => Failure::new(message),
            ThrowSpec::Detailed { message, detail } => Failure {
                message,
                detail,
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
