//! Task focus inference.
//!
//! Same mechanism as context scanning, over the task description with its
//! own taxonomy of work areas.

use super::{scan, Category};

const TASK_CATEGORIES: &[Category] = &[
    Category {
        triggers: &["incident", "on-call", "alert"],
        description: "Operational / incident management.",
    },
    Category {
        triggers: &["feature", "sprint", "backlog"],
        description: "Feature planning / delivery.",
    },
    Category {
        triggers: &["priority", "prioritize"],
        description: "Priority setting / ordering work.",
    },
    Category {
        triggers: &["decide", "choose"],
        description: "Decision-making / strategy.",
    },
];

const NO_FOCUS_FALLBACK: &str =
    "General task with no specific domain keywords detected.";

/// Infer focus-area labels from the raw task string.
pub fn infer_task_focus(task: &str) -> Vec<String> {
    scan(task, TASK_CATEGORIES, NO_FOCUS_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_task_hits_three_areas() {
        let focus = infer_task_focus(
            "Prioritize incidents in the on-call queue and decide what to work on first.",
        );
        assert_eq!(
            focus,
            vec![
                "Operational / incident management.",
                "Priority setting / ordering work.",
                "Decision-making / strategy.",
            ]
        );
    }

    #[test]
    fn test_feature_task() {
        let focus = infer_task_focus("Plan the next sprint around the new feature.");
        assert!(focus.contains(&"Feature planning / delivery.".to_string()));
    }

    #[test]
    fn test_fallback_for_generic_task() {
        let focus = infer_task_focus("Tidy up the wiki pages.");
        assert_eq!(
            focus,
            vec!["General task with no specific domain keywords detected."]
        );
    }

    #[test]
    fn test_empty_task_yields_nothing() {
        assert!(infer_task_focus("").is_empty());
    }
}
