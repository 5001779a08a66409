//! # Opportunity ranker
//!
//! Blends estimated volume and difficulty into a single 0-100 opportunity
//! score, and sorts metric batches by it. Ease dominates raw volume by
//! design: an easy keyword with modest volume beats a high-volume keyword
//! nobody can rank for.

use crate::metrics::KeywordMetrics;

/// `round(easiness * 0.6 + normalizedVolume * 0.4)` where the volume is
/// log-normalized and capped at 100. `search_volume >= 10` is guaranteed by
/// the estimator, so the log10 input is always >= 1.
pub fn opportunity_score(search_volume: u32, difficulty: u8) -> u8 {
    let normalized_volume = (f64::from(search_volume).log10() * 20.0).min(100.0);
    let easiness = f64::from(100 - u32::from(difficulty).min(100));
    (easiness * 0.6 + normalized_volume * 0.4).round() as u8
}

/// Sort a batch descending by opportunity score. The sort is stable, so
/// equal scores keep their input order — the documented tie-break.
pub fn rank_by_opportunity(mut batch: Vec<KeywordMetrics>) -> Vec<KeywordMetrics> {
    batch.sort_by(|a, b| b.opportunity_score.cmp(&a.opportunity_score));
    batch
}
