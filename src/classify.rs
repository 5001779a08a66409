//! # Classifier bank
//!
//! Independent pattern/lexicon matchers over the keyword string. Each
//! classifier lower-cases its input and checks substring containment (not
//! tokenized word match) against the tables in [`crate::lexicons`] — parity
//! with the tuned production behavior, including its generosity ("canvas"
//! contains "vs").

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicons::{
    COMMERCIAL_INDICATORS, GEO_MODIFIERS, INDUSTRY_MULTIPLIERS, NAVIGATIONAL_INDICATORS,
    QUESTION_WORDS, SEASONAL_TERMS, TECHNICAL_TERMS, TRANSACTIONAL_INDICATORS,
};
use crate::metrics::{Intent, KeywordType};

// Any 4-digit 20xx token counts as a "year" difficulty signal.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d{2}").expect("year regex"));

// Seasonality only treats 2024-2039 as timely content.
static SEASONAL_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"20(2[4-9]|3[0-9])").expect("seasonal year regex"));

/// True if the keyword starts with a question/auxiliary word followed by a
/// space ("how to ...", "is ...").
pub fn is_question(keyword: &str) -> bool {
    let lower = keyword.to_lowercase();
    QUESTION_WORDS
        .iter()
        .any(|qw| matches!(lower.strip_prefix(qw), Some(rest) if rest.starts_with(' ')))
}

/// Question format wins over the word-count buckets.
pub fn keyword_type(keyword: &str, word_count: usize) -> KeywordType {
    if is_question(keyword) {
        KeywordType::Question
    } else if word_count <= 2 {
        KeywordType::ShortTail
    } else if word_count == 3 {
        KeywordType::MidTail
    } else {
        KeywordType::LongTail
    }
}

fn contains_any(lower: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| lower.contains(t))
}

/// Intent precedence chain, first match wins:
/// transactional → navigational → commercial → informational.
pub fn intent(keyword: &str) -> Intent {
    let lower = keyword.to_lowercase();
    if contains_any(&lower, TRANSACTIONAL_INDICATORS) {
        Intent::Transactional
    } else if contains_any(&lower, NAVIGATIONAL_INDICATORS) {
        Intent::Navigational
    } else if contains_any(&lower, COMMERCIAL_INDICATORS) {
        Intent::Commercial
    } else {
        Intent::Informational
    }
}

/// Number of distinct commercial-indicator terms contained in the keyword.
/// Feeds the difficulty model (+5 per hit).
pub fn commercial_indicator_count(keyword: &str) -> usize {
    let lower = keyword.to_lowercase();
    COMMERCIAL_INDICATORS
        .iter()
        .filter(|t| lower.contains(*t))
        .count()
}

pub fn has_transactional_indicator(keyword: &str) -> bool {
    contains_any(&keyword.to_lowercase(), TRANSACTIONAL_INDICATORS)
}

/// First matching industry multiplier, or 1.0.
pub fn industry_multiplier(keyword: &str) -> f64 {
    let lower = keyword.to_lowercase();
    INDUSTRY_MULTIPLIERS
        .iter()
        .find(|(term, _)| lower.contains(term.as_str()))
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

pub fn has_geo_modifier(keyword: &str) -> bool {
    contains_any(&keyword.to_lowercase(), GEO_MODIFIERS)
}

/// Technical jargon signal; callers gate it on `word_count >= 3`.
pub fn has_technical_term(keyword: &str) -> bool {
    contains_any(&keyword.to_lowercase(), TECHNICAL_TERMS)
}

/// Brand signal: any ASCII uppercase letter in the original casing.
pub fn has_uppercase(keyword: &str) -> bool {
    keyword.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(keyword: &str) -> bool {
    keyword.chars().any(|c| c.is_ascii_digit())
}

/// Any 20xx token (timely-content signal for difficulty).
pub fn has_year(keyword: &str) -> bool {
    YEAR_RE.is_match(keyword)
}

/// Comparison phrasing raises competitiveness; spaces are significant so
/// "vs" inside another word does not count here.
pub fn is_comparison(keyword: &str) -> bool {
    let lower = keyword.to_lowercase();
    lower.contains(" vs ") || lower.contains(" versus ")
}

/// Seasonality score: first matching seasonal term wins; otherwise a year
/// in 2024-2039 scores 50 (content that will date); otherwise 0.
pub fn seasonality_score(keyword: &str) -> u8 {
    let lower = keyword.to_lowercase();
    if let Some((_, score)) = SEASONAL_TERMS
        .iter()
        .find(|(term, _)| lower.contains(term.as_str()))
    {
        return *score;
    }
    if SEASONAL_YEAR_RE.is_match(keyword) {
        return 50;
    }
    0
}
