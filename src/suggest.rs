//! # Related-keyword suggestions
//!
//! Pure template expansion over a base keyword: question prefixes, quality
//! modifiers, content-type suffixes, and a current-year variant. The result
//! is truncated to the first 10 candidates *in generation order*, so with
//! 6 prefixes and 7 modifiers the suffix and year variants never survive
//! the cut. That truncation point is a compatibility quirk carried over
//! from the production service; keep it until product says otherwise.

use chrono::{Datelike, Utc};

const QUESTION_PREFIXES: &[&str] = &[
    "how to",
    "what is",
    "why",
    "when to",
    "where to find",
    "best way to",
];

const MODIFIERS: &[&str] = &[
    "best",
    "top",
    "free",
    "online",
    "professional",
    "affordable",
    "cheap",
];

const SUFFIXES: &[&str] = &[
    "guide",
    "tutorial",
    "tips",
    "examples",
    "tools",
    "software",
    "service",
];

const MAX_SUGGESTIONS: usize = 10;

/// Generate related-keyword variants from a base keyword. Pure and
/// restartable; always returns exactly 10 strings, all lower-cased.
pub fn generate_related_keywords(base: &str) -> Vec<String> {
    let lower = base.to_lowercase();

    let mut suggestions = Vec::with_capacity(
        QUESTION_PREFIXES.len() + MODIFIERS.len() + SUFFIXES.len() + 1,
    );

    for prefix in QUESTION_PREFIXES {
        suggestions.push(format!("{prefix} {lower}"));
    }
    for modifier in MODIFIERS {
        suggestions.push(format!("{modifier} {lower}"));
    }
    for suffix in SUFFIXES {
        suggestions.push(format!("{lower} {suffix}"));
    }
    suggestions.push(format!("{lower} {}", Utc::now().year()));

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
