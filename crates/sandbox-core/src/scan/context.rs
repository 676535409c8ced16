//! Context signal extraction.
//!
//! Scans the situational context for a fixed taxonomy of conditions:
//! incident severity, SLA pressure, traffic, launch pressure, security
//! risk, and feature/internal pressure.

use super::{scan, Category};

/// Ordered context taxonomy. Severity outranks everything downstream, so it
/// sits first; the behavior classifier keys off these description texts.
const CONTEXT_CATEGORIES: &[Category] = &[
    Category {
        triggers: &["p1", "sev1", "severity 1"],
        description: "High-severity incident present (P1/Sev1).",
    },
    Category {
        triggers: &["p2", "sev2"],
        description: "Medium-severity incident present (P2/Sev2).",
    },
    Category {
        triggers: &["sla"],
        description: "Explicit SLA or response-time constraint mentioned.",
    },
    Category {
        triggers: &["traffic"],
        description: "Traffic conditions are relevant (load/peak).",
    },
    Category {
        triggers: &["launch", "release", "demo"],
        description: "Upcoming launch/release pressure.",
    },
    Category {
        triggers: &["security", "vulnerability"],
        description: "Security risk present in context.",
    },
    Category {
        triggers: &["internal", "feature"],
        description: "Requests or pressure related to features/internal work.",
    },
];

const NO_SIGNAL_FALLBACK: &str =
    "Context provided but no obvious high-signal keywords detected.";

/// Extract named signals from the raw context string.
///
/// Emission order follows the fixed taxonomy, not input order. Non-empty
/// context with no keyword hits yields the single fallback signal; blank
/// context yields nothing.
pub fn extract_signals(context: &str) -> Vec<String> {
    scan(context, CONTEXT_CATEGORIES, NO_SIGNAL_FALLBACK)
}
