//! Decision synthesis: one recommended action per run.
//!
//! The sentence is selected by mode first, then narrowed by signal presence
//! (stability) or task keywords (delivery). Exactly one sentence is always
//! produced.

use crate::types::Mode;

fn any_contains(items: &[String], needle: &str) -> bool {
    items.iter().any(|item| item.to_lowercase().contains(needle))
}

/// Map (mode, signals, task) to the recommended action sentence.
pub fn synthesize_decision(mode: Mode, signals: &[String], task: &str) -> String {
    let lower_task = task.to_lowercase();

    let sentence = match mode {
        Mode::StabilityFirst => {
            if any_contains(signals, "high-severity") {
                "Treat the high-severity incident as the top priority and address it before anything else."
            } else if any_contains(signals, "security") {
                "Focus on reducing security risk before pursuing new feature work."
            } else {
                "Keep risk low: choose work that has minimal impact on production stability."
            }
        }
        Mode::DeliveryFirst => {
            if lower_task.contains("sprint") || lower_task.contains("feature") {
                "Prioritize shipping user-visible feature work while monitoring for new risks."
            } else {
                "Bias toward tasks that create visible progress or user value."
            }
        }
        Mode::Balanced => {
            "Balance stability and delivery: address any obvious risks, then pick the highest-value task."
        }
    };

    sentence.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stability_incident_first() {
        let signals = strings(&["High-severity incident present (P1/Sev1)."]);
        let decision = synthesize_decision(Mode::StabilityFirst, &signals, "triage");
        assert!(decision.starts_with("Treat the high-severity incident"));
    }

    #[test]
    fn test_stability_security_first() {
        let signals = strings(&["Security risk present in context."]);
        let decision = synthesize_decision(Mode::StabilityFirst, &signals, "plan");
        assert!(decision.starts_with("Focus on reducing security risk"));
    }

    #[test]
    fn test_stability_generic_low_risk() {
        let decision = synthesize_decision(Mode::StabilityFirst, &[], "plan");
        assert!(decision.starts_with("Keep risk low"));
    }

    #[test]
    fn test_delivery_feature_shipping() {
        let decision = synthesize_decision(Mode::DeliveryFirst, &[], "Plan the next sprint");
        assert!(decision.starts_with("Prioritize shipping user-visible feature work"));
    }

    #[test]
    fn test_delivery_generic_progress() {
        let decision = synthesize_decision(Mode::DeliveryFirst, &[], "Do the thing");
        assert!(decision.starts_with("Bias toward tasks"));
    }

    #[test]
    fn test_balanced_fixed_sentence() {
        let decision = synthesize_decision(Mode::Balanced, &[], "");
        assert_eq!(
            decision,
            "Balance stability and delivery: address any obvious risks, then pick the highest-value task."
        );
    }

    #[test]
    fn test_never_empty() {
        for mode in [Mode::StabilityFirst, Mode::DeliveryFirst, Mode::Balanced] {
            assert!(!synthesize_decision(mode, &[], "").is_empty());
        }
    }
}
