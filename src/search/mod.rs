//! Lexical retrieval: TF-IDF vectorization, URL ranking, and the engine
//! that orchestrates them.
//!
//! # Architecture
//!
//! - `types`: core records (ChunkId, PageMetadata, ChunkRecord, ScoredChunk)
//! - `tfidf`: IDF statistics, sparse vector construction, cosine similarity
//! - `urlrank`: lexical-overlap ranking of candidate link URLs
//! - `engine`: RagEngine orchestrating chunk → tokenize → vectorize → score
//!
//! # Usage
//!
//! ```
//! use pagerag::search::{PageMetadata, RagEngine};
//!
//! let mut engine = RagEngine::new();
//! engine.index_page(
//!     "Our support team answers within a day. Contact us at support@example.com.",
//!     PageMetadata {
//!         title: Some("Support".to_string()),
//!         url: Some("https://example.com/contact".to_string()),
//!         source: Some("web".to_string()),
//!     },
//! );
//!
//! let best = engine.retrieve("How can I contact you?", 3);
//! assert!(best[0].chunk.text.contains("Contact"));
//! ```
//!
//! # Algorithm Details
//!
//! **TF-IDF weighting**: term frequency times smoothed inverse document
//! frequency (`ln((1 + n) / (1 + df)) + 1`), recomputed over the whole
//! corpus on every index call so all vectors share one consistent table.
//!
//! **Cosine similarity**: dot product over overlapping terms divided by the
//! vector norms; zero-magnitude vectors score 0.0 instead of NaN.
//!
//! **URL ranking**: count of URL path keywords appearing in the question's
//! token set, stable-sorted descending.

pub mod types;

mod engine;
mod tfidf;
mod urlrank;

pub use engine::RagEngine;
pub use tfidf::{cosine_similarity, TfIdfVectorizer};
pub use types::{ChunkId, ChunkRecord, PageMetadata, ScoredChunk};
pub use urlrank::rank_urls;
