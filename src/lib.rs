// src/lib.rs
// Public library surface for integration tests (and the route handlers that
// embed this engine).

pub mod classify;
pub mod engine;
pub mod estimate;
pub mod lexicons;
pub mod metrics;
pub mod normalize;
pub mod opportunity;
pub mod suggest;

// ---- Re-exports for stable public API ----
pub use crate::engine::{analyze_keyword, analyze_keywords, KeywordAnalyzer};
pub use crate::metrics::{
    Competition, DifficultyLabel, Intent, KeywordMetrics, KeywordType, Priority,
    SearchVolumeRange,
};
pub use crate::suggest::generate_related_keywords;
