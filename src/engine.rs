//! # Analysis engine
//!
//! Pure, synchronous orchestration that maps a keyword string to a full
//! [`KeywordMetrics`] record. No I/O, no shared state; every invocation is
//! independent, so batches parallelize trivially (map, then one sort).

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::classify;
use crate::estimate;
use crate::metrics::{Competition, DifficultyLabel, KeywordMetrics, Priority, SearchVolumeRange};
use crate::normalize::normalize;
use crate::opportunity;

/// Facade over the normalizer, classifier bank and estimators.
#[derive(Debug, Clone, Default)]
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze one keyword with the default random source.
    pub fn analyze(&self, keyword: &str) -> Result<KeywordMetrics> {
        self.analyze_with_rng(keyword, &mut rand::rng())
    }

    /// Analyze one keyword with an injected variance source. Tests pin a
    /// seeded generator here to get reproducible volumes; everything except
    /// the volume-derived fields is deterministic either way.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        keyword: &str,
        rng: &mut R,
    ) -> Result<KeywordMetrics> {
        let normalized = normalize(keyword)?;
        let keyword = normalized.trimmed;
        let word_count = normalized.word_count;

        let intent = classify::intent(&keyword);
        let kind = classify::keyword_type(&keyword, word_count);

        let search_volume = estimate::estimate_search_volume(&keyword, word_count, intent, rng);
        let difficulty = estimate::calculate_difficulty(&keyword, word_count);
        let opportunity_score = opportunity::opportunity_score(search_volume, difficulty);

        debug!(
            target: "keyword_analysis",
            keyword = %keyword,
            word_count,
            ?intent,
            search_volume,
            difficulty,
            opportunity_score,
            "keyword analyzed"
        );

        Ok(KeywordMetrics {
            search_volume,
            search_volume_range: SearchVolumeRange::from_volume(search_volume),
            traffic_potential: (f64::from(search_volume) * 0.30).round() as u32,
            difficulty,
            difficulty_label: DifficultyLabel::from_score(difficulty),
            competition: Competition::from_score(difficulty),
            kind,
            word_count,
            intent,
            opportunity_score,
            priority: Priority::from_score(opportunity_score),
            estimated_cpc: estimate::estimate_cpc(&keyword, intent, difficulty),
            content_length_recommendation: estimate::recommend_content_length(
                &keyword, difficulty, intent,
            ),
            has_featured_snippet_potential: estimate::featured_snippet_potential(
                &keyword, intent, word_count,
            ),
            seasonality_score: classify::seasonality_score(&keyword),
            keyword,
        })
    }

    /// Analyze a batch and rank it by opportunity score, best first. Equal
    /// scores keep input order. Any invalid keyword fails the whole batch.
    pub fn analyze_batch<S: AsRef<str>>(&self, keywords: &[S]) -> Result<Vec<KeywordMetrics>> {
        self.analyze_batch_with_rng(keywords, &mut rand::rng())
    }

    /// Batch analysis with an injected variance source.
    pub fn analyze_batch_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        keywords: &[S],
        rng: &mut R,
    ) -> Result<Vec<KeywordMetrics>> {
        let analyzed = keywords
            .iter()
            .map(|kw| self.analyze_with_rng(kw.as_ref(), rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(opportunity::rank_by_opportunity(analyzed))
    }
}

/// Convenience entry point for route handlers: analyze one keyword.
pub fn analyze_keyword(keyword: &str) -> Result<KeywordMetrics> {
    KeywordAnalyzer::new().analyze(keyword)
}

/// Convenience entry point: analyze a seed-keyword list and rank it.
pub fn analyze_keywords<S: AsRef<str>>(keywords: &[S]) -> Result<Vec<KeywordMetrics>> {
    KeywordAnalyzer::new().analyze_batch(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Intent, KeywordType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn analyze_trims_and_preserves_casing() {
        let m = analyze_keyword("  HubSpot alternatives ").unwrap();
        assert_eq!(m.keyword, "HubSpot alternatives");
        assert_eq!(m.word_count, 2);
    }

    #[test]
    fn analyze_rejects_blank_input() {
        let analyzer = KeywordAnalyzer::new();
        assert!(analyzer.analyze("").is_err());
        assert!(analyzer.analyze("   ").is_err());
        assert!(analyzer.analyze_batch(&["seo", " "]).is_err());
    }

    #[test]
    fn volume_derived_fields_are_consistent_within_a_call() {
        let analyzer = KeywordAnalyzer::new();
        for _ in 0..200 {
            let m = analyzer.analyze("best project management software").unwrap();
            assert_eq!(m.search_volume_range, SearchVolumeRange::from_volume(m.search_volume));
            assert_eq!(
                m.traffic_potential,
                (f64::from(m.search_volume) * 0.30).round() as u32
            );
            assert_eq!(m.difficulty_label, DifficultyLabel::from_score(m.difficulty));
            assert_eq!(m.competition, Competition::from_score(m.difficulty));
            assert_eq!(m.priority, Priority::from_score(m.opportunity_score));
            assert_eq!(
                m.opportunity_score,
                opportunity::opportunity_score(m.search_volume, m.difficulty)
            );
        }
    }

    #[test]
    fn seeded_analysis_is_fully_reproducible() {
        let analyzer = KeywordAnalyzer::new();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let ma = analyzer.analyze_with_rng("seo tools 2025", &mut a).unwrap();
        let mb = analyzer.analyze_with_rng("seo tools 2025", &mut b).unwrap();
        assert_eq!(ma, mb);
    }

    #[test]
    fn question_keyword_end_to_end() {
        let m = analyze_keyword("how to lose weight fast").unwrap();
        assert_eq!(m.kind, KeywordType::Question);
        assert_eq!(m.intent, Intent::Informational);
        assert_eq!(m.word_count, 5);
        assert!(m.has_featured_snippet_potential);
    }
}
