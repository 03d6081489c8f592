// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario loading and application.

use crate::config::{RuleSpec, ScenarioConfig};
use crate::error::WrapError;
use crate::rules::{Behavior, OverrideRule};
use crate::stub::{stub, Stub};
use crate::wrapped::Wrapped;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when working with scenarios
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to apply scenario: {0}")]
    Wrap(#[from] WrapError),
}

/// Validated set of override rules ready to install on a wrapper
#[derive(Debug)]
pub struct Scenario {
    config: ScenarioConfig,
    rules: Vec<OverrideRule>,
}

impl Scenario {
    /// Load a scenario from a TOML or JSON file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        let config: ScenarioConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Self::from_config(config)
    }

    /// Create a scenario from a config object
    pub fn from_config(config: ScenarioConfig) -> Result<Self, ScenarioError> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for (idx, spec) in config.rules.iter().enumerate() {
            if spec.method.is_empty() {
                return Err(ScenarioError::Validation(format!(
                    "rule {}: method name must not be empty",
                    idx
                )));
            }
            if !config.methods.is_empty() && !config.methods.contains(&spec.method) {
                return Err(ScenarioError::Validation(format!(
                    "rule {}: method '{}' is not declared in methods {:?}",
                    idx, spec.method, config.methods
                )));
            }
            let behavior = compile_behavior(idx, spec)?;
            rules.push(match &spec.when {
                Some(args) => OverrideRule::scoped(spec.method.clone(), args.clone(), behavior),
                None => OverrideRule::unconditional(spec.method.clone(), behavior),
            });
        }
        Ok(Self { config, rules })
    }

    /// Get the scenario name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get the scenario configuration
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Compiled rules in file order
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// Build a stub exposing the declared methods
    pub fn stub(&self) -> Stub {
        stub(self.config.methods.iter().cloned())
    }

    /// Install every rule on `wrapped`, in file order.
    ///
    /// All or nothing: if any rule names a method the subject lacks, nothing
    /// is installed.
    pub fn apply(&self, wrapped: &Wrapped) -> Result<(), ScenarioError> {
        debug!(target: "wrapspy", scenario = %self.config.name, rules = self.rules.len(), "applying scenario");
        for rule in &self.rules {
            wrapped.ensure_method(&rule.method)?;
        }
        for rule in &self.rules {
            wrapped.install(rule.clone());
        }
        Ok(())
    }
}

fn compile_behavior(idx: usize, spec: &RuleSpec) -> Result<Behavior, ScenarioError> {
    match (&spec.returns, &spec.throws, spec.delegate) {
        (Some(value), None, false) => Ok(Behavior::Return(value.clone())),
        (None, Some(throw), false) => Ok(Behavior::Throw(throw.clone().into())),
        (None, None, true) => Ok(Behavior::Delegate),
        (None, None, false) => Err(ScenarioError::Validation(format!(
            "rule {} for '{}': one of returns, throws or delegate is required",
            idx, spec.method
        ))),
        _ => Err(ScenarioError::Validation(format!(
            "rule {} for '{}': returns, throws and delegate are mutually exclusive",
            idx, spec.method
        ))),
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
