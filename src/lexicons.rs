//! # Lexicons
//!
//! Fixed word lists and multiplier tables consumed by the classifier bank
//! and the metric estimators. All matching against these tables is
//! case-insensitive substring containment on the lower-cased keyword, so
//! the lists must stay verbatim — "tuning" a term changes every downstream
//! metric.
//!
//! The two value tables (industry multipliers, seasonal terms) are lookups
//! where the *first* matching entry wins, so they ship as embedded JSON
//! arrays of pairs rather than maps: the order on disk is the precedence.

use once_cell::sync::Lazy;

/// Question/auxiliary words. A keyword is question-format when it starts
/// with one of these followed by a space.
pub const QUESTION_WORDS: &[&str] = &[
    "how", "what", "why", "when", "where", "who", "which", "can", "should", "will", "would",
    "could", "do", "does", "is", "are", "was", "were",
];

/// Commercial-intent indicators. The *count* of hits also feeds the
/// difficulty model (+5 per hit).
pub const COMMERCIAL_INDICATORS: &[&str] = &[
    "buy",
    "purchase",
    "price",
    "cost",
    "cheap",
    "affordable",
    "discount",
    "deal",
    "sale",
    "shop",
    "store",
    "order",
    "best",
    "top",
    "review",
    "compare",
    "vs",
    "versus",
    "alternative",
    "service",
    "solution",
];

/// Transactional-intent indicators (highest precedence in the intent chain).
pub const TRANSACTIONAL_INDICATORS: &[&str] = &[
    "buy",
    "purchase",
    "order",
    "download",
    "get",
    "hire",
    "subscribe",
    "register",
    "signup",
    "book",
    "reserve",
    "apply",
    "install",
];

/// Navigational-intent indicators.
pub const NAVIGATIONAL_INDICATORS: &[&str] = &[
    "login",
    "sign in",
    "official",
    "website",
    "contact",
    "support",
    "customer service",
    "account",
    "dashboard",
    "portal",
];

/// Geographic modifiers. Note the deliberately broad substrings ("in",
/// "at", "us") — parity with the tuned production table, not an oversight.
pub const GEO_MODIFIERS: &[&str] = &[
    "near me",
    "in",
    "at",
    "local",
    "city",
    "state",
    "country",
    "usa",
    "us",
    "uk",
    "canada",
    "australia",
    "new york",
    "london",
];

/// Technical jargon terms; only counted for keywords of three or more words.
pub const TECHNICAL_TERMS: &[&str] = &[
    "api",
    "sdk",
    "framework",
    "library",
    "algorithm",
    "protocol",
    "integration",
    "implementation",
    "architecture",
    "infrastructure",
];

/// Industry/topic → search-volume multiplier. First substring match wins.
pub static INDUSTRY_MULTIPLIERS: Lazy<Vec<(String, f64)>> = Lazy::new(|| {
    let raw = include_str!("../industry_multipliers.json");
    serde_json::from_str(raw).expect("valid industry multiplier table")
});

/// Seasonal term → seasonality score. First substring match wins.
pub static SEASONAL_TERMS: Lazy<Vec<(String, u8)>> = Lazy::new(|| {
    let raw = include_str!("../seasonal_terms.json");
    serde_json::from_str(raw).expect("valid seasonal term table")
});
