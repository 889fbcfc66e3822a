//! # PageRag
//!
//! Lexical passage retrieval engine for "chat with this page" features.
//!
//! Given arbitrary page text, the engine builds an in-memory searchable
//! index of passages; given a natural-language query, it returns the
//! passages most relevant to that query, with no network calls and no
//! external model. The caller hands the best-matching passages to a generation step
//! (an LLM); that step is outside this crate, whose contract ends at
//! "return the best-matching passages".
//!
//! ## Modules
//!
//! - [`tokenize`] - Unicode-aware text normalization into index terms
//! - [`chunking`] - Overlapping word-window segmentation of page text
//! - [`search`] - TF-IDF vectorization, cosine scoring, URL ranking, and
//!   the [`RagEngine`](search::RagEngine) orchestrator
//! - [`config`] - Tuning constants and the stopword table
//! - [`error`] - Error types for invalid configuration
//!
//! ## Example
//!
//! ```
//! use pagerag::search::{rank_urls, PageMetadata, RagEngine};
//!
//! let mut engine = RagEngine::new();
//! engine.index_page(
//!     "Welcome to Acme. Contact us at support@example.com for help. \
//!      We ship worldwide and answer within one business day.",
//!     PageMetadata {
//!         title: Some("Acme Support".to_string()),
//!         url: Some("https://acme.example/contact".to_string()),
//!         source: Some("web".to_string()),
//!     },
//! );
//!
//! // Which passages answer the question?
//! let passages = engine.retrieve("How can I contact you?", 3);
//! assert!(!passages.is_empty());
//!
//! // Which of the page's links are worth indexing too?
//! let links = vec![
//!     "https://acme.example/pricing".to_string(),
//!     "https://acme.example/contact".to_string(),
//! ];
//! let relevant = rank_urls(&links, "How can I contact you?", 1);
//! assert!(relevant[0].contains("contact"));
//! ```
//!
//! ## Scope
//!
//! Purely lexical and purely in-memory: no persistence across sessions, no
//! embedding-based similarity, no stemming, no fetching of linked pages
//! (only scoring of already-known URL strings). One engine instance per
//! browsing/chat session; instances are fully independent.

pub mod chunking;
pub mod config;
pub mod error;
pub mod search;
pub mod tokenize;

pub use chunking::{PassageChunk, WordChunker};
pub use error::ChunkingError;
pub use search::{rank_urls, ChunkId, ChunkRecord, PageMetadata, RagEngine, ScoredChunk};
pub use tokenize::tokenize;
