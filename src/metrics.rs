//! # Keyword metrics
//!
//! The output record of the analysis pipeline plus its label enums. The JSON
//! shape is a public contract: route handlers store and return these records
//! verbatim, so the serialized field names must not drift.

use serde::{Deserialize, Serialize};

/// Presumed purpose behind a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Informational,
    Commercial,
    Transactional,
    Navigational,
}

/// Lexical shape of the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordType {
    ShortTail,
    MidTail,
    LongTail,
    Question,
}

/// Human-facing bucket for the 0-100 difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLabel {
    Easy,
    Medium,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
}

impl DifficultyLabel {
    /// Bucket thresholds: <30 Easy, <60 Medium, <80 Hard, else Very Hard.
    pub fn from_score(difficulty: u8) -> Self {
        if difficulty < 30 {
            Self::Easy
        } else if difficulty < 60 {
            Self::Medium
        } else if difficulty < 80 {
            Self::Hard
        } else {
            Self::VeryHard
        }
    }
}

/// Coarser competition bucket over the same difficulty score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    /// Bucket thresholds: <40 Low, <70 Medium, else High.
    pub fn from_score(difficulty: u8) -> Self {
        if difficulty < 40 {
            Self::Low
        } else if difficulty < 70 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Content-planning priority derived from the opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Bucket thresholds: >=70 High, >=40 Medium, else Low.
    pub fn from_score(opportunity_score: u8) -> Self {
        if opportunity_score >= 70 {
            Self::High
        } else if opportunity_score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Order-of-magnitude bucket for the estimated monthly search volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchVolumeRange {
    #[serde(rename = "<100")]
    Under100,
    #[serde(rename = "100-1K")]
    Hundreds,
    #[serde(rename = "1K-10K")]
    Thousands,
    #[serde(rename = "10K-100K")]
    TensOfThousands,
    #[serde(rename = "100K+")]
    Over100K,
}

impl SearchVolumeRange {
    pub fn from_volume(search_volume: u32) -> Self {
        if search_volume >= 100_000 {
            Self::Over100K
        } else if search_volume >= 10_000 {
            Self::TensOfThousands
        } else if search_volume >= 1_000 {
            Self::Thousands
        } else if search_volume >= 100 {
            Self::Hundreds
        } else {
            Self::Under100
        }
    }
}

/// Full metrics record for one keyword. Constructed fresh per call, never
/// mutated afterwards; the caller owns it.
///
/// Every field is derived from the keyword alone, except that the search
/// volume carries a bounded random variance. Volume-derived fields
/// (`search_volume_range`, `traffic_potential`, `opportunity_score`,
/// `priority`) stay internally consistent within a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    pub keyword: String,

    // Search volume & traffic potential
    pub search_volume: u32,
    pub search_volume_range: SearchVolumeRange,
    pub traffic_potential: u32,

    // Keyword difficulty
    pub difficulty: u8,
    pub difficulty_label: DifficultyLabel,
    pub competition: Competition,

    // Type & characteristics
    #[serde(rename = "type")]
    pub kind: KeywordType,
    pub word_count: usize,
    pub intent: Intent,

    // Opportunity
    pub opportunity_score: u8,
    pub priority: Priority,

    // SEO insights
    #[serde(rename = "estimatedCPC")]
    pub estimated_cpc: f64,
    pub content_length_recommendation: u32,
    pub has_featured_snippet_potential: bool,
    pub seasonality_score: u8,
}
