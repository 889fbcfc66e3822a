//! Core record types for indexing and retrieval.
//!
//! These are explicit tagged records rather than ad hoc maps so downstream
//! consumers (the UI/integration layer handing passages to a generation
//! step) get compile-time guarantees about available fields. All records
//! derive serde so the embedding layer has a stable external
//! representation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique chunk identifier within one engine instance.
///
/// Ids are assigned sequentially in corpus insertion order by the owning
/// [`RagEngine`](crate::search::RagEngine); there is no global counter, so
/// independent engine instances never interfere with each other. Insertion
/// order doubles as the deterministic retrieval tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChunkId(u64);

impl ChunkId {
    /// Creates a ChunkId from a raw u64 value.
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value of this ID.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Metadata describing the page a chunk came from.
///
/// Supplied by the caller of `index_page` and passed through to every chunk
/// unchanged; the engine never interprets these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Page title if known
    pub title: Option<String>,
    /// Page URL if known
    pub url: Option<String>,
    /// Where the text came from (e.g. "web", "pdf", "selection")
    pub source: Option<String>,
}

/// An indexed passage: source text plus its sparse TF-IDF vector.
///
/// Immutable once created, except that `vector` is recomputed whenever the
/// corpus-wide IDF table changes (i.e. on every `index_page` call). The
/// vector never contains zero-weight entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Corpus-wide sequence index of this chunk
    pub id: ChunkId,
    /// Exact word-for-word span of the source text
    pub text: String,
    /// Raw whitespace-delimited word count of `text` (pre-filter)
    pub word_count: usize,
    /// Caller-supplied page metadata, unchanged
    pub metadata: PageMetadata,
    /// Sparse token → TF-IDF weight mapping
    pub vector: HashMap<String, f32>,
}

/// A retrieval result: one chunk with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The matching chunk (full record, text and metadata included)
    pub chunk: ChunkRecord,
    /// Cosine similarity against the query vector, in (0, 1]
    pub score: f32,
}
