//! Named scenario presets: fixed (task, rules, context) bundles.
//!
//! Presets are configuration data for presentation shells, not part of the
//! core contract. Two bundles ship builtin; arbitrary bundles load from
//! YAML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::SimulationRequest;

/// Errors that can occur when loading a scenario bundle.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown builtin scenario: {0}")]
    UnknownBuiltin(String),
}

/// A fixed input bundle for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub task: String,

    /// Rules, one per line.
    pub rules: String,

    pub context: String,
}

impl Scenario {
    /// Names accepted by [`Scenario::builtin`].
    pub const BUILTIN_NAMES: &'static [&'static str] = &["triage", "conflict"];

    /// Look up a builtin preset by name.
    pub fn builtin(name: &str) -> Result<Self, ScenarioError> {
        match name {
            "triage" => Ok(Self {
                task: "Prioritize incidents in the on-call queue for the next 2 hours \
                       and decide what to work on first."
                    .to_string(),
                rules: [
                    "Must protect production traffic before anything else.",
                    "Never ignore a P1 incident.",
                    "Prefer resolving high-severity issues before low-severity ones.",
                    "Avoid starting new feature work while there is an active P1.",
                ]
                .join("\n"),
                context: "High traffic. One P1 incident impacting paying customers. \
                          Two P3 feature requests from internal teams. SLA for P1 is \
                          30 minutes. No current deployments running."
                    .to_string(),
            }),
            "conflict" => Ok(Self {
                task: "Plan what to do for the next sprint: handle incidents or ship \
                       a new feature launch."
                    .to_string(),
                rules: [
                    "Must meet regulatory deadlines when they exist.",
                    "Prefer shipping user-facing value when risk is low.",
                    "Avoid risky changes right before high-traffic events.",
                    "Never ignore known security vulnerabilities.",
                ]
                .join("\n"),
                context: "Upcoming marketing launch in 3 days. One known security bug \
                          marked as medium. Product is pushing for a new feature demo. \
                          No explicit regulatory dates mentioned."
                    .to_string(),
            }),
            other => Err(ScenarioError::UnknownBuiltin(other.to_string())),
        }
    }

    /// Parse a scenario bundle from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a scenario bundle from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Turn the bundle into a simulation request.
    pub fn into_request(self, simulate_drift: bool) -> SimulationRequest {
        SimulationRequest {
            task: self.task,
            rules_text: self.rules,
            context: self.context,
            simulate_drift,
        }
    }
}
