//! Keyword normalization: trimming and word counting.
//!
//! This crate takes the strict stance on malformed input: empty or
//! whitespace-only keywords are rejected here, before any classifier runs,
//! so every downstream function can assume `word_count >= 1`.

use anyhow::bail;

/// A trimmed keyword plus its whitespace-delimited token count.
/// Casing of the original input is preserved (the difficulty model looks
/// at uppercase letters as a brand signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKeyword {
    pub trimmed: String,
    pub word_count: usize,
}

/// Trim the raw input and count its words.
///
/// Errors on empty or whitespace-only input.
pub fn normalize(raw: &str) -> anyhow::Result<NormalizedKeyword> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("invalid keyword: empty or whitespace-only input");
    }
    Ok(NormalizedKeyword {
        trimmed: trimmed.to_string(),
        word_count: trimmed.split_whitespace().count(),
    })
}
