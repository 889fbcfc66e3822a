//! Text normalization into index terms.
//!
//! Turns raw prose into the lowercase, letters-only token stream that the
//! TF-IDF vectorizer and URL ranker consume. Splitting uses the Unicode
//! letter class rather than an ASCII test so non-English alphabets
//! ("números", "gatos") tokenize correctly, and digits act as separators so
//! purely numeric candidates never become tokens.
//!
//! Duplicates are preserved in original order; term-frequency counting
//! happens downstream in the vectorizer. No minimum token length is applied
//! beyond the stopword filter, so short content-bearing words ("los",
//! "son", "with") survive.

use crate::config::STOPWORDS;

/// Normalizes raw text into a sequence of index terms.
///
/// Lowercases the input (Unicode-aware), splits on runs of non-letter
/// characters, and drops stopwords. Returns tokens in original order with
/// duplicates preserved. Empty or letter-free input yields an empty vec.
///
/// # Examples
///
/// ```
/// use pagerag::tokenize::tokenize;
///
/// let tokens = tokenize("Hello, World! This is a test.");
/// assert_eq!(tokens, vec!["hello", "world", "test"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty() && !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}
