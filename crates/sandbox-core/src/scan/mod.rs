//! Keyword scanners over the free-text inputs.
//!
//! Both scanners share one mechanism: a fixed, ordered table of categories,
//! each category a set of trigger substrings and one descriptive sentence.
//! Output follows table order, never input order, with at most one sentence
//! per category. Matching is lower-cased substring containment only; there
//! is no deeper language understanding by design.

mod context;
mod focus;

pub use context::extract_signals;
pub use focus::infer_task_focus;

/// One taxonomy entry: any trigger present emits the description once.
pub(crate) struct Category {
    pub triggers: &'static [&'static str],
    pub description: &'static str,
}

/// Scan `text` against an ordered category table.
///
/// Non-empty text matching zero categories yields the single fallback
/// sentence; blank text yields nothing.
pub(crate) fn scan(text: &str, categories: &[Category], fallback: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut matched: Vec<String> = categories
        .iter()
        .filter(|category| category.triggers.iter().any(|t| lower.contains(t)))
        .map(|category| category.description.to_string())
        .collect();

    if matched.is_empty() && !text.trim().is_empty() {
        matched.push(fallback.to_string());
    }

    matched
}
