//! # sandbox-core
//!
//! Deterministic agent behavior simulation engine.
//!
//! Given a task description, a list of textual rules, a situational
//! context, and a drift flag, the engine classifies the situation into a
//! behavior mode (stability-first, delivery-first, balanced), synthesizes
//! one recommended action, and builds a human-readable rationale trace.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same inputs always produce byte-identical output,
//!    trace included
//! 2. **Shallow by design**: classification is lower-cased substring
//!    matching over fixed trigger tables, no language understanding
//! 3. **Pure**: no I/O, no shared state, one invocation is one computation
//! 4. **Total**: empty and blank inputs degrade to empty or fallback
//!    sequences, never errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use sandbox_core::{simulate, Scenario};
//!
//! let request = Scenario::builtin("triage")?.into_request(false);
//! let result = simulate(&request);
//!
//! println!("{} ({})", result.behavior.mode, result.behavior.style);
//! println!("{}", result.trace);
//! ```

pub mod behavior;
pub mod rules;
pub mod scan;
pub mod scenario;
pub mod synthesizer;
pub mod trace;
pub mod types;

// Re-export main types at crate root
pub use behavior::classify_behavior;
pub use rules::{apply_drift, extract_lines, RuleSet};
pub use scan::{extract_signals, infer_task_focus};
pub use scenario::{Scenario, ScenarioError};
pub use synthesizer::synthesize_decision;
pub use trace::{build_trace, TraceInputs};
pub use types::{BehaviorResult, Mode, SimulationRequest, SimulationResult, Style};

use tracing::debug;

/// Run one behavior simulation.
///
/// This is the main entry point. The pipeline runs leaf-first: line
/// extraction and rule classification, then the two keyword scanners, then
/// drift, behavior classification, decision synthesis, and finally the
/// trace over everything computed.
pub fn simulate(request: &SimulationRequest) -> SimulationResult {
    let lines = extract_lines(&request.rules_text);
    let RuleSet { hard, soft } = RuleSet::classify(lines);

    let task_focus = infer_task_focus(&request.task);
    let signals = extract_signals(&request.context);

    debug!(
        hard = hard.len(),
        soft = soft.len(),
        signals = signals.len(),
        focus = task_focus.len(),
        "classified inputs"
    );

    // The trace reports the soft sequence as classified; drift mutates a
    // working copy consumed by everything downstream.
    let mut post_drift_soft = soft.clone();
    let drift_note = apply_drift(&mut post_drift_soft, request.simulate_drift);
    if let Some(note) = &drift_note {
        debug!(%note, "applied drift");
    }

    let behavior = classify_behavior(&hard, &post_drift_soft, &signals, request.simulate_drift);
    let decision = synthesize_decision(behavior.mode, &signals, &request.task);

    let trace = build_trace(&TraceInputs {
        task: &request.task,
        hard_rules: &hard,
        soft_rules: &soft,
        drift_note: drift_note.as_deref(),
        task_focus: &task_focus,
        signals: &signals,
        decision: &decision,
        behavior: &behavior,
    });

    SimulationResult {
        hard_rules: hard,
        soft_rules: post_drift_soft,
        signals,
        task_focus,
        behavior,
        decision,
        drift_note,
        trace,
    }
}
