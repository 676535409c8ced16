//! Rationale trace assembly.
//!
//! A purely presentational, ordered record of every intermediate value the
//! pipeline computed. Step numbers are fixed labels; the drift step is
//! simply absent when no drift was applied. The trace is a derived view,
//! never a second source of truth.

use crate::types::BehaviorResult;

/// Everything the trace reports, borrowed from the pipeline stages.
///
/// `soft_rules` is the sequence as classified, before any drift removal;
/// the drift step itself records what was dropped.
pub struct TraceInputs<'a> {
    pub task: &'a str,
    pub hard_rules: &'a [String],
    pub soft_rules: &'a [String],
    pub drift_note: Option<&'a str>,
    pub task_focus: &'a [String],
    pub signals: &'a [String],
    pub decision: &'a str,
    pub behavior: &'a BehaviorResult,
}

/// Assemble the multi-line rationale trace in fixed step order.
pub fn build_trace(inputs: &TraceInputs<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Step 1 — Read task:".to_string());
    let task = inputs.task.trim();
    let shown = if task.is_empty() { "(empty task)" } else { task };
    lines.push(format!("  \"{}\"", shown));
    lines.push(String::new());

    lines.push("Step 2 — Parse rules into hard vs soft constraints:".to_string());
    if inputs.hard_rules.is_empty() && inputs.soft_rules.is_empty() {
        lines.push("  No rules specified.".to_string());
    } else {
        if !inputs.hard_rules.is_empty() {
            lines.push("  Hard constraints:".to_string());
            for rule in inputs.hard_rules {
                lines.push(format!("    - {}", rule));
            }
        }
        if !inputs.soft_rules.is_empty() {
            lines.push("  Soft preferences:".to_string());
            for rule in inputs.soft_rules {
                lines.push(format!("    - {}", rule));
            }
        }
    }
    lines.push(String::new());

    if let Some(note) = inputs.drift_note {
        lines.push("Step 3 — Apply drift:".to_string());
        lines.push(format!("  {}", note));
        lines.push(String::new());
    }

    lines.push("Step 4 — Interpret task focus:".to_string());
    for focus in inputs.task_focus {
        lines.push(format!("  - {}", focus));
    }
    lines.push(String::new());

    lines.push("Step 5 — Extract context signals:".to_string());
    if inputs.signals.is_empty() {
        lines.push("  - No notable signals found.".to_string());
    } else {
        for signal in inputs.signals {
            lines.push(format!("  - {}", signal));
        }
    }
    lines.push(String::new());

    lines.push("Step 6 — Choose action:".to_string());
    lines.push(format!("  {}", inputs.decision));
    lines.push(String::new());

    lines.push("Step 7 — Behavior classification:".to_string());
    lines.push(format!("  Mode: {}", inputs.behavior.mode));
    lines.push(format!("  Style: {}", inputs.behavior.style));
    lines.push(format!("  Tags: {}", inputs.behavior.tags.join(", ")));

    if let Some(note) = inputs.drift_note {
        lines.push(String::new());
        lines.push("Drift Note:".to_string());
        lines.push(format!("  {}", note));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mode, Style};

    fn behavior() -> BehaviorResult {
        BehaviorResult {
            mode: Mode::Balanced,
            style: Style::Neutral,
            tags: vec!["balanced".to_string()],
        }
    }

    #[test]
    fn test_empty_run_trace() {
        let behavior = behavior();
        let trace = build_trace(&TraceInputs {
            task: "",
            hard_rules: &[],
            soft_rules: &[],
            drift_note: None,
            task_focus: &[],
            signals: &[],
            decision: "Balance stability and delivery.",
            behavior: &behavior,
        });

        assert!(trace.contains("Step 1 — Read task:\n  \"(empty task)\""));
        assert!(trace.contains("  No rules specified."));
        assert!(trace.contains("  - No notable signals found."));
        assert!(!trace.contains("Step 3"));
        assert!(!trace.contains("Drift Note:"));
        assert!(trace.ends_with("  Tags: balanced"));
    }

    #[test]
    fn test_step_order_is_fixed() {
        let behavior = behavior();
        let hard = vec!["Must do X.".to_string()];
        let soft = vec!["Prefer Y.".to_string()];
        let focus = vec!["Operational / incident management.".to_string()];
        let signals = vec!["Explicit SLA or response-time constraint mentioned.".to_string()];
        let trace = build_trace(&TraceInputs {
            task: "triage the queue",
            hard_rules: &hard,
            soft_rules: &soft,
            drift_note: Some("Simulated drift: agent ignores soft rule \"Prefer Y.\"."),
            task_focus: &focus,
            signals: &signals,
            decision: "Do the safest thing.",
            behavior: &behavior,
        });

        let positions: Vec<usize> = [
            "Step 1 — Read task:",
            "Step 2 — Parse rules into hard vs soft constraints:",
            "Step 3 — Apply drift:",
            "Step 4 — Interpret task focus:",
            "Step 5 — Extract context signals:",
            "Step 6 — Choose action:",
            "Step 7 — Behavior classification:",
            "Drift Note:",
        ]
        .iter()
        .map(|header| trace.find(header).expect(header))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_drift_step_skipped_without_note() {
        let behavior = behavior();
        let soft = vec!["Prefer Y.".to_string()];
        let trace = build_trace(&TraceInputs {
            task: "plan",
            hard_rules: &[],
            soft_rules: &soft,
            drift_note: None,
            task_focus: &[],
            signals: &[],
            decision: "Do something.",
            behavior: &behavior,
        });

        assert!(!trace.contains("Apply drift"));
        assert!(trace.contains("  Soft preferences:\n    - Prefer Y."));
    }
}
