//! Production configuration constants.
//!
//! This module contains the tuning constants and configuration data used
//! throughout the engine. Values here are deliberate product decisions,
//! kept in one place so they can be adjusted without touching algorithms.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// =============================================================================
// Chunk Window Configuration
// =============================================================================

/// Default chunk window size in whitespace-delimited words.
///
/// Passages are measured in raw words (before token filtering) because the
/// window exists to bound how much source text each retrieved passage spans,
/// not how many index terms it produces. 200 words is roughly a long
/// paragraph of English prose.
pub const DEFAULT_CHUNK_SIZE_WORDS: usize = 200;

/// Default overlap between consecutive chunk windows, in words.
///
/// Overlap keeps sentences that straddle a window boundary retrievable from
/// at least one chunk. Must stay below [`DEFAULT_CHUNK_SIZE_WORDS`].
pub const DEFAULT_CHUNK_OVERLAP_WORDS: usize = 40;

// =============================================================================
// Retrieval Configuration
// =============================================================================

/// Default number of passages returned by a retrieval call.
pub const DEFAULT_TOP_K: usize = 5;

/// Default number of candidate links returned by URL ranking.
pub const DEFAULT_URL_TOP_K: usize = 3;

// =============================================================================
// Stopword Table
// =============================================================================

/// English function words excluded from indexing.
///
/// This is configuration data, not a derivable algorithm: the list is sized
/// conservatively so that short content-bearing words ("with", "how", "los",
/// "son") are never filtered. Growing it trades recall on grammatical noise
/// against the risk of dropping domain vocabulary.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "it", "its", "this", "that",
        "these", "those", "and", "or", "but", "of", "to", "in", "on", "at", "for", "as", "by",
    ]
    .into_iter()
    .collect()
});
