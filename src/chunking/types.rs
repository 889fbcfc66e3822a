//! Types for text chunking.

use crate::search::types::PageMetadata;

/// A passage of source text produced by the chunker.
///
/// Chunking operates on raw whitespace-delimited words (not filtered
/// tokens) so the passage text remains an exact word-for-word span of the
/// source, suitable for later display.
#[derive(Debug, Clone, PartialEq)]
pub struct PassageChunk {
    /// Index of this chunk within the chunked text (0-based)
    pub index: usize,
    /// The text content of this chunk
    pub text: String,
    /// Number of whitespace-delimited words in `text`, counted before any
    /// token filtering (raw passage size, not index terms)
    pub word_count: usize,
    /// Metadata supplied by the caller, attached unchanged to every chunk
    pub metadata: PageMetadata,
}
