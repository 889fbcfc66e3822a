//! Windowed text segmentation.
//!
//! Splits long page text into overlapping, bounded-size passages. The
//! window is measured in whitespace-delimited words so chunk boundaries
//! never cut through a word, and overlap keeps sentences that straddle a
//! boundary retrievable from at least one chunk.
//!
//! Chunking is a pure, restartable operation: no shared state, and the same
//! inputs always yield the same chunk sequence.

mod types;

pub use types::PassageChunk;

use crate::config::{DEFAULT_CHUNK_OVERLAP_WORDS, DEFAULT_CHUNK_SIZE_WORDS};
use crate::error::ChunkingError;
use crate::search::types::PageMetadata;
use tracing::instrument;

/// Sliding word-window chunker.
///
/// Produces chunks of up to `chunk_size_words` words where consecutive
/// chunks share `overlap_words` words. Both parameters are fixed at
/// construction time.
#[derive(Debug, Clone)]
pub struct WordChunker {
    /// Target chunk size in words
    chunk_size_words: usize,
    /// Overlap between consecutive chunks in words (always < chunk size)
    overlap_words: usize,
}

impl Default for WordChunker {
    fn default() -> Self {
        Self {
            chunk_size_words: DEFAULT_CHUNK_SIZE_WORDS,
            overlap_words: DEFAULT_CHUNK_OVERLAP_WORDS,
        }
    }
}

impl WordChunker {
    /// Creates a chunker with a custom window configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkingError::InvalidConfig`] if `chunk_size_words` is
    /// zero or `overlap_words >= chunk_size_words`. An overlap at or above
    /// the window size would make the window stride zero or negative, so it
    /// is rejected at the call site rather than silently looping.
    pub fn new(chunk_size_words: usize, overlap_words: usize) -> Result<Self, ChunkingError> {
        if chunk_size_words == 0 {
            return Err(ChunkingError::InvalidConfig(
                "chunk size must be at least 1 word".to_string(),
            ));
        }
        if overlap_words >= chunk_size_words {
            return Err(ChunkingError::InvalidConfig(format!(
                "overlap ({overlap_words}) must be smaller than chunk size ({chunk_size_words})"
            )));
        }
        Ok(Self {
            chunk_size_words,
            overlap_words,
        })
    }

    /// Returns the configured chunk size in words.
    pub fn chunk_size_words(&self) -> usize {
        self.chunk_size_words
    }

    /// Returns the configured overlap in words.
    pub fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Splits `text` into overlapping passages with `metadata` attached.
    ///
    /// The first chunk covers words `[0, chunk_size)`; each subsequent
    /// window starts `chunk_size - overlap` words after the previous one,
    /// and windows keep sliding until the next one would start at or past
    /// the end of the word sequence. The final chunk may be shorter than
    /// the window if the text runs out, so text at least `chunk_size` words
    /// long with a nonzero overlap ends in a short trailing chunk covering
    /// the overlap region. Text shorter than one window yields exactly one
    /// chunk containing the whole text; empty or whitespace-only text
    /// yields no chunks.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn chunk(&self, text: &str, metadata: &PageMetadata) -> Vec<PassageChunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let stride = self.chunk_size_words - self.overlap_words;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < words.len() {
            let end = (start + self.chunk_size_words).min(words.len());
            let window = &words[start..end];

            chunks.push(PassageChunk {
                index: chunks.len(),
                text: window.join(" "),
                word_count: window.len(),
                metadata: metadata.clone(),
            });

            start += stride;
        }

        chunks
    }
}
