//! RAG orchestrator: owns the corpus and answers retrieval queries.
//!
//! [`RagEngine`] ties the pipeline together: `index_page` runs chunking →
//! tokenization → IDF recomputation → vectorization and stores the
//! resulting records; `retrieve` weights a query against the current IDF
//! table and scans every chunk with cosine similarity.
//!
//! # IDF recomputation
//!
//! Every `index_page` call recomputes IDF over the *entire* corpus and
//! re-vectorizes every stored chunk. That makes indexing O(corpus size) per
//! call by design: TF-IDF weights for all chunks are defined relative to
//! the current global document-frequency statistics, so incremental
//! patching would silently distort older vectors. The corpus is scoped to
//! one page/session, so the cost stays small.
//!
//! # Thread Safety
//!
//! The engine is single-threaded and purely computational. It holds plain
//! in-memory structures with no internal locking; callers needing
//! concurrent access must serialize externally. Independent engine
//! instances (one per tab or chat session) are fully isolated.

use super::tfidf::{cosine_similarity, TfIdfVectorizer};
use super::types::{ChunkId, ChunkRecord, PageMetadata, ScoredChunk};
use crate::chunking::WordChunker;
use crate::tokenize::tokenize;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Lexical retrieval engine for one browsing/chat session.
///
/// Created empty, grows only via [`index_page`](Self::index_page), and is
/// discarded when the session ends; there is no cross-session persistence.
/// Construct-and-own: no ambient global state is involved, so any number
/// of engines can coexist.
///
/// # Example
///
/// ```
/// use pagerag::search::{PageMetadata, RagEngine};
///
/// let mut engine = RagEngine::new();
/// let metadata = PageMetadata {
///     title: Some("Support".to_string()),
///     url: Some("https://example.com/contact".to_string()),
///     source: Some("web".to_string()),
/// };
/// engine.index_page("Contact us at support@example.com for help.", metadata);
///
/// let results = engine.retrieve("how can I contact you", 3);
/// assert!(!results.is_empty());
/// ```
pub struct RagEngine {
    /// Chunk window configuration, fixed at construction
    chunker: WordChunker,
    /// IDF table owner; rebuilt on every index call
    vectorizer: TfIdfVectorizer,
    /// Corpus in insertion order; ids equal positions
    chunks: Vec<ChunkRecord>,
    /// Token sequence per chunk, cached so IDF recomputation does not
    /// re-tokenize unchanged text
    chunk_tokens: Vec<Vec<String>>,
}

impl Default for RagEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RagEngine {
    /// Creates an empty engine with the default chunk window
    /// (see [`crate::config`]).
    pub fn new() -> Self {
        Self::with_chunker(WordChunker::default())
    }

    /// Creates an empty engine with a custom chunk window.
    pub fn with_chunker(chunker: WordChunker) -> Self {
        Self {
            chunker,
            vectorizer: TfIdfVectorizer::new(),
            chunks: Vec::new(),
            chunk_tokens: Vec::new(),
        }
    }

    /// Indexes page text into the corpus.
    ///
    /// Chunks `content`, appends the chunks with `metadata` attached, then
    /// recomputes the IDF table over the whole corpus and re-vectorizes
    /// every chunk (old and new) against the refreshed table.
    ///
    /// Returns the number of chunks added. Empty or whitespace-only
    /// content adds nothing and leaves the corpus untouched.
    #[instrument(skip_all, fields(content_len = content.len()))]
    pub fn index_page(&mut self, content: &str, metadata: PageMetadata) -> usize {
        let passages = self.chunker.chunk(content, &metadata);
        if passages.is_empty() {
            debug!("No chunks produced, corpus unchanged");
            return 0;
        }
        let added = passages.len();

        for passage in passages {
            let id = ChunkId::from_u64(self.chunks.len() as u64);
            self.chunk_tokens.push(tokenize(&passage.text));
            self.chunks.push(ChunkRecord {
                id,
                text: passage.text,
                word_count: passage.word_count,
                metadata: passage.metadata,
                vector: Default::default(),
            });
        }

        // IDF is a global statistic: rebuild it over the entire corpus and
        // refresh every chunk vector against the new table.
        self.vectorizer.compute_idf(&self.chunk_tokens);
        for (chunk, tokens) in self.chunks.iter_mut().zip(&self.chunk_tokens) {
            chunk.vector = self.vectorizer.vectorize(tokens);
        }

        info!(
            added,
            corpus = self.chunks.len(),
            vocabulary = self.vectorizer.vocabulary_len(),
            "Indexed page"
        );
        added
    }

    /// Returns the `k` chunks most relevant to `query`, best first.
    ///
    /// The query is tokenized and weighted against the current IDF table;
    /// out-of-vocabulary query terms are silently dropped. Chunks are
    /// scored by cosine similarity, sorted descending with ascending
    /// insertion order as the tie-break, and truncated to `k`.
    ///
    /// An empty corpus, an empty query, or a query with no terms in common
    /// with any chunk all yield an empty vec, never an error.
    #[instrument(skip_all, fields(query_len = query.len(), k))]
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<ScoredChunk> {
        let query_vector = self.vectorizer.vectorize(&tokenize(query));
        if query_vector.is_empty() {
            debug!("Query vector is empty (no in-vocabulary terms)");
            return Vec::new();
        }

        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .filter_map(|chunk| {
                let score = cosine_similarity(&query_vector, &chunk.vector);
                (score > 0.0).then(|| ScoredChunk {
                    chunk: chunk.clone(),
                    score,
                })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.chunk.id.cmp(&b.chunk.id))
        });
        scored.truncate(k);

        debug!(results = scored.len(), "Retrieval complete");
        scored
    }

    /// Number of chunks in the corpus.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns `true` if nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Read-only view of the corpus in insertion order.
    pub fn chunks(&self) -> &[ChunkRecord] {
        &self.chunks
    }
}
