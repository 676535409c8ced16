//! Core request and result types for behavior simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level behavior classification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    StabilityFirst,
    DeliveryFirst,
    Balanced,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::StabilityFirst => "stability-first",
            Mode::DeliveryFirst => "delivery-first",
            Mode::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary descriptive modifier layered on top of the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Neutral,
    Cautious,
    Assertive,
    Conflicted,
    Drifted,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Neutral => "neutral",
            Style::Cautious => "cautious",
            Style::Assertive => "assertive",
            Style::Conflicted => "conflicted",
            Style::Drifted => "drifted",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode, style, and descriptive tags derived from one run.
///
/// Immutable once computed; every field is a pure function of the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorResult {
    pub mode: Mode,
    pub style: Style,
    pub tags: Vec<String>,
}

/// The four inputs of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Free-text task description.
    pub task: String,

    /// Rules, one per line. Blank lines are ignored.
    pub rules_text: String,

    /// Free-text situational context.
    pub context: String,

    /// Drop the last soft preference to simulate behavioral drift.
    #[serde(default)]
    pub simulate_drift: bool,
}

impl SimulationRequest {
    pub fn new(
        task: impl Into<String>,
        rules_text: impl Into<String>,
        context: impl Into<String>,
        simulate_drift: bool,
    ) -> Self {
        Self {
            task: task.into(),
            rules_text: rules_text.into(),
            context: context.into(),
            simulate_drift,
        }
    }
}

/// Everything computed in one simulation run.
///
/// Created once per invocation and never mutated afterwards. `soft_rules`
/// reflects the post-drift sequence; the trace records the pre-drift one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub hard_rules: Vec<String>,
    pub soft_rules: Vec<String>,
    pub signals: Vec<String>,
    pub task_focus: Vec<String>,
    pub behavior: BehaviorResult,
    pub decision: String,
    pub drift_note: Option<String>,
    pub trace: String,
}
