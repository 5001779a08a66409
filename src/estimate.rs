//! # Metric estimators
//!
//! Numeric models over the normalized keyword and classifier outputs. The
//! volume estimator is deliberately stochastic (bounded multiplicative
//! variance) and must not be memoized; difficulty, CPC, content length and
//! seasonality are pure functions of the keyword.

use rand::Rng;

use crate::classify;
use crate::metrics::Intent;

/// Estimate monthly search volume. Pipeline: word-count base → intent
/// factor → question boost → industry multiplier → geo damping → variance
/// in [0.8, 1.2) → clean rounding → clamp to >= 10.
///
/// The variance source is injected so tests can pin a seed; production
/// callers pass `rand::rng()`.
pub fn estimate_search_volume<R: Rng + ?Sized>(
    keyword: &str,
    word_count: usize,
    intent: Intent,
    rng: &mut R,
) -> u32 {
    // Broad heads to specific tails.
    let mut volume: f64 = match word_count {
        1 => 50_000.0,
        2 => 15_000.0,
        3 => 5_000.0,
        4 => 2_000.0,
        _ => 800.0,
    };

    volume *= match intent {
        Intent::Informational => 1.5,
        Intent::Commercial => 1.2,
        Intent::Transactional => 0.8,
        // No adjustment for navigational queries.
        Intent::Navigational => 1.0,
    };

    if classify::is_question(keyword) {
        volume *= 1.3;
    }

    volume *= classify::industry_multiplier(keyword);

    if classify::has_geo_modifier(keyword) {
        // More specific, lower volume but higher conversion.
        volume *= 0.7;
    }

    let variance = 0.8 + rng.random::<f64>() * 0.4;
    let raw = (volume * variance).round();

    // Round to "clean" numbers the way volume tools report them.
    let clean = if raw >= 10_000.0 {
        (raw / 1_000.0).round() * 1_000.0
    } else if raw >= 1_000.0 {
        (raw / 100.0).round() * 100.0
    } else {
        (raw / 10.0).round() * 10.0
    };

    clean.max(10.0) as u32
}

/// Keyword difficulty in [0, 100]. Deterministic additive model starting at
/// 50; the caller-supplied word count gates several signals.
///
/// Intent is *not* an input: the transactional bump re-checks the indicator
/// list directly, so a keyword classified navigational can still pay the
/// +15 if it happens to contain a transactional term.
pub fn calculate_difficulty(keyword: &str, word_count: usize) -> u8 {
    let mut difficulty: i32 = 50;

    // Fewer words, broader query, stiffer competition.
    difficulty += match word_count {
        1 => 40,
        2 => 25,
        3 => 10,
        4 => -10,
        _ => -25,
    };

    if classify::is_question(keyword) {
        difficulty -= 15;
    }

    difficulty += classify::commercial_indicator_count(keyword) as i32 * 5;

    if classify::has_transactional_indicator(keyword) {
        difficulty += 15;
    }

    // Brand/specific terms rank easier.
    if classify::has_uppercase(keyword) && word_count >= 2 {
        difficulty -= 10;
    }

    if classify::has_digit(keyword) {
        difficulty -= 8;
    }

    if classify::has_year(keyword) {
        difficulty -= 5;
    }

    if classify::has_technical_term(keyword) && word_count >= 3 {
        difficulty -= 12;
    }

    if classify::has_geo_modifier(keyword) {
        difficulty -= 8;
    }

    if classify::is_comparison(keyword) {
        difficulty += 10;
    }

    difficulty.clamp(0, 100) as u8
}

/// Estimated cost-per-click in dollars, rounded to 2 decimal places.
pub fn estimate_cpc(keyword: &str, intent: Intent, difficulty: u8) -> f64 {
    let mut cpc: f64 = 0.50;

    cpc *= match intent {
        Intent::Transactional => 4.0,
        Intent::Commercial => 2.5,
        Intent::Informational => 1.0,
        Intent::Navigational => 1.0,
    };

    // Harder keywords cost more, up to +50%.
    cpc *= 1.0 + f64::from(difficulty) / 200.0;

    // Expensive verticals, first bracket wins.
    let lower = keyword.to_lowercase();
    if lower.contains("insurance") || lower.contains("lawyer") || lower.contains("attorney") {
        cpc *= 8.0;
    } else if lower.contains("finance") || lower.contains("loan") || lower.contains("mortgage") {
        cpc *= 5.0;
    } else if lower.contains("software") || lower.contains("saas") || lower.contains("service") {
        cpc *= 3.0;
    }

    (cpc * 100.0).round() / 100.0
}

/// Target article length in words for ranking on this keyword.
pub fn recommend_content_length(keyword: &str, difficulty: u8, intent: Intent) -> u32 {
    let mut length: i32 = if difficulty >= 80 {
        3_000
    } else if difficulty >= 60 {
        2_500
    } else if difficulty >= 40 {
        2_000
    } else if difficulty >= 20 {
        1_500
    } else {
        1_200
    };

    match intent {
        Intent::Informational => length += 500,
        Intent::Transactional => length -= 300,
        _ => {}
    }

    if classify::is_question(keyword) {
        // Questions want a comprehensive answer.
        length += 400;
    }

    length as u32
}

/// Whether the keyword is likely to trigger a featured-snippet box.
pub fn featured_snippet_potential(keyword: &str, intent: Intent, word_count: usize) -> bool {
    if classify::is_question(keyword) {
        return true;
    }
    if intent == Intent::Informational && word_count >= 3 {
        return true;
    }
    let lower = keyword.to_lowercase();
    if lower.contains(" vs ") || lower.contains("difference between") {
        return true;
    }
    if lower.contains("what is") || lower.contains("meaning of") || lower.contains("definition") {
        return true;
    }
    false
}
