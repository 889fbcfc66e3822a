//! Error types for pagerag.
//!
//! The engine is pure computation over caller-supplied data, so the error
//! surface is small: empty or degenerate inputs are normal zero-result
//! cases everywhere, and only invalid configuration is rejected.

use thiserror::Error;

/// Errors that can occur when configuring text chunking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkingError {
    /// Invalid chunking configuration
    #[error("Invalid chunking config: {0}")]
    InvalidConfig(String),
}
