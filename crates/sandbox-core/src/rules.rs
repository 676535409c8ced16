//! Rule line extraction, hard/soft classification, and drift simulation.
//!
//! A rule line is a *hard constraint* when its lower-cased form contains any
//! trigger word, otherwise it is a *soft preference*. The partition is
//! exhaustive and disjoint, and both halves keep the original relative order.

/// Trigger words marking a rule line as non-negotiable. Case-insensitive.
const HARD_TRIGGERS: &[&str] = &[
    "must", "never", "cannot", "can't", "do not", "don't", "avoid",
];

/// Split raw multi-line text into trimmed, non-empty lines, order preserved.
pub fn extract_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Hard/soft partition of a rule-line sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub hard: Vec<String>,
    pub soft: Vec<String>,
}

impl RuleSet {
    /// Partition rule lines into hard constraints and soft preferences.
    pub fn classify(lines: Vec<String>) -> Self {
        let mut hard = Vec::new();
        let mut soft = Vec::new();

        for line in lines {
            if is_hard(&line) {
                hard.push(line);
            } else {
                soft.push(line);
            }
        }

        RuleSet { hard, soft }
    }

    pub fn is_empty(&self) -> bool {
        self.hard.is_empty() && self.soft.is_empty()
    }
}

fn is_hard(line: &str) -> bool {
    let lower = line.to_lowercase();
    HARD_TRIGGERS.iter().any(|trigger| lower.contains(trigger))
}

/// Simulate behavioral drift by dropping the last soft preference.
///
/// Only runs when `simulate_drift` is set and at least one soft preference
/// exists; removes exactly one rule. Returns the drift note quoting the
/// dropped rule, when one was dropped.
pub fn apply_drift(soft: &mut Vec<String>, simulate_drift: bool) -> Option<String> {
    if !simulate_drift {
        return None;
    }

    let dropped = soft.pop()?;
    Some(format!(
        "Simulated drift: agent ignores soft rule \"{}\".",
        dropped
    ))
}
