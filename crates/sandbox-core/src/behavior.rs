//! Behavior classification: an ordered decision cascade over rule and
//! signal facts.
//!
//! The cascade applies strict, non-configurable rules, evaluated in order
//! with later assignments overriding earlier ones:
//! 1. Default mode is balanced.
//! 2. High-severity signal, production-protection rule, a "never ignore"
//!    P1 rule, or a security hard rule forces stability-first.
//! 3. A ship/user-facing soft preference claims delivery-first, unless a
//!    high-severity signal, security rule, or production-protection rule
//!    holds.
//!
//! Style is layered on afterwards: a launch-pressure signal combined with
//! a ship preference reads as conflicted and overrides everything else.

use crate::types::{BehaviorResult, Mode, Style};

fn any_contains(items: &[String], needle: &str) -> bool {
    items.iter().any(|item| item.to_lowercase().contains(needle))
}

/// Classify hard rules, post-drift soft rules, signals, and the drift flag
/// into a mode/style/tags triple. Total over all inputs; cannot fail.
pub fn classify_behavior(
    hard_rules: &[String],
    soft_rules: &[String],
    signals: &[String],
    drift: bool,
) -> BehaviorResult {
    let protects_production = any_contains(hard_rules, "protect production");
    let never_ignores_p1 = hard_rules.iter().any(|rule| {
        let lower = rule.to_lowercase();
        lower.contains("never ignore") && lower.contains("p1")
    });
    let security_rule = any_contains(hard_rules, "security");
    let ships_value = soft_rules.iter().any(|rule| {
        let lower = rule.to_lowercase();
        lower.contains("ship") || lower.contains("user-facing")
    });

    let high_severity = any_contains(signals, "high-severity");
    let launch_pressure = any_contains(signals, "launch");

    let mut mode = Mode::Balanced;
    if high_severity || protects_production || never_ignores_p1 || security_rule {
        mode = Mode::StabilityFirst;
    }
    // Note: a lone "never ignore P1" rule does not block the delivery claim.
    if ships_value && !high_severity && !security_rule && !protects_production {
        mode = Mode::DeliveryFirst;
    }

    let tags = match mode {
        Mode::StabilityFirst => vec!["risk-aware".to_string(), "defensive".to_string()],
        Mode::DeliveryFirst => vec!["speed-biased".to_string()],
        Mode::Balanced => vec!["balanced".to_string()],
    };

    let style = if launch_pressure && ships_value {
        Style::Conflicted
    } else if drift {
        Style::Drifted
    } else {
        match mode {
            Mode::StabilityFirst => Style::Cautious,
            Mode::DeliveryFirst => Style::Assertive,
            Mode::Balanced => Style::Neutral,
        }
    };

    BehaviorResult { mode, style, tags }
}
