//! TF-IDF vector construction and cosine similarity.
//!
//! The vectorizer owns the corpus-wide inverse-document-frequency table and
//! turns token sequences into sparse term → weight mappings. IDF is a
//! global statistic over the *current* document set: it is rebuilt
//! wholesale by [`TfIdfVectorizer::compute_idf`], never patched
//! incrementally, because every existing vector is defined relative to the
//! current document-frequency counts.
//!
//! # Weighting
//!
//! The IDF weight uses the smoothed formula `ln((1 + n) / (1 + df)) + 1.0`:
//!
//! - strictly positive, so a term present in every chunk of a single-page
//!   corpus still contributes to similarity
//! - terms with equal document frequency receive equal weight
//! - monotone non-increasing in document frequency

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Computes IDF statistics over a corpus and weights token sequences into
/// sparse TF-IDF vectors.
///
/// # Thread Safety
///
/// This type is **not** thread-safe; it is exclusively owned by one
/// [`RagEngine`](crate::search::RagEngine) instance.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    /// Token → inverse-document-frequency weight for the current corpus
    idf: HashMap<String, f32>,
}

impl TfIdfVectorizer {
    /// Creates a vectorizer with an empty IDF table.
    ///
    /// Until [`compute_idf`](Self::compute_idf) runs, every token is
    /// out-of-vocabulary and [`vectorize`](Self::vectorize) returns empty
    /// vectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the IDF table from the token sequences of all documents.
    ///
    /// `df(t)` counts the number of documents containing `t` at least once;
    /// the resulting table replaces any prior state wholesale.
    pub fn compute_idf(&mut self, docs: &[Vec<String>]) {
        let n = docs.len();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for tokens in docs {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        self.idf = document_frequency
            .into_iter()
            .map(|(token, df)| {
                let weight = ((1 + n) as f32 / (1 + df) as f32).ln() + 1.0;
                (token.to_string(), weight)
            })
            .collect();

        debug!(
            documents = n,
            vocabulary = self.idf.len(),
            "Rebuilt IDF table"
        );
    }

    /// Weights a token sequence into a sparse TF-IDF vector.
    ///
    /// Each distinct token maps to `tf(t) * idf(t)`. Tokens absent from the
    /// IDF table (out-of-vocabulary, e.g. a query term never seen in the
    /// corpus) are dropped, so the result never contains zero-weight
    /// entries.
    pub fn vectorize(&self, tokens: &[String]) -> HashMap<String, f32> {
        let mut term_frequency: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *term_frequency.entry(token).or_insert(0) += 1;
        }

        term_frequency
            .into_iter()
            .filter_map(|(token, tf)| {
                self.idf
                    .get(token)
                    .map(|idf| (token.to_string(), tf as f32 * idf))
            })
            .collect()
    }

    /// Number of distinct terms in the current IDF table.
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }
}

/// Cosine similarity between two sparse vectors.
///
/// Dot product over overlapping keys divided by the product of Euclidean
/// norms. Identical nonzero vectors score 1.0 (within floating tolerance);
/// vectors with disjoint key sets score 0.0; if either vector has zero
/// magnitude the result is 0.0 rather than NaN.
///
/// All sums run in sorted term order rather than hash iteration order, so
/// equal-content vectors produce bit-identical scores and the engine's
/// insertion-order tie-break holds unconditionally.
pub fn cosine_similarity(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    // Iterate the smaller vector when computing the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut products: Vec<(&str, f32)> = small
        .iter()
        .filter_map(|(token, weight)| {
            large
                .get(token)
                .map(|other| (token.as_str(), weight * other))
        })
        .collect();
    products.sort_unstable_by(|x, y| x.0.cmp(y.0));
    let dot: f32 = products.into_iter().map(|(_, product)| product).sum();

    let norm_a = euclidean_norm(a);
    let norm_b = euclidean_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Euclidean norm of a sparse vector, summed in sorted term order.
fn euclidean_norm(v: &HashMap<String, f32>) -> f32 {
    let mut weights: Vec<(&str, f32)> = v.iter().map(|(token, w)| (token.as_str(), *w)).collect();
    weights.sort_unstable_by(|x, y| x.0.cmp(y.0));
    weights.into_iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn doc(text: &str) -> Vec<String> {
        tokenize(text)
    }

    #[test]
    fn test_equal_document_frequency_gives_equal_idf() {
        // Three terms each occurring in exactly 2 of 3 documents.
        let docs = vec![
            doc("apple banana cherry"),
            doc("apple banana dates"),
            doc("cherry dates elderberry"),
        ];

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&docs);

        let weights: Vec<f32> = ["apple", "banana", "cherry"]
            .iter()
            .map(|t| {
                let vec = vectorizer.vectorize(&[t.to_string()]);
                vec[&t.to_string()]
            })
            .collect();

        assert!((weights[0] - weights[1]).abs() < 1e-6);
        assert!((weights[1] - weights[2]).abs() < 1e-6);
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let docs = vec![
            doc("common rare"),
            doc("common other"),
            doc("common thing"),
        ];

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&docs);

        let rare = vectorizer.vectorize(&["rare".to_string()]);
        let common = vectorizer.vectorize(&["common".to_string()]);

        assert!(rare[&"rare".to_string()] > common[&"common".to_string()]);
    }

    #[test]
    fn test_idf_positive_for_ubiquitous_terms() {
        // A term present in every document must still get positive weight.
        let docs = vec![doc("contact page"), doc("contact form")];

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&docs);

        let vec = vectorizer.vectorize(&["contact".to_string()]);
        assert!(vec[&"contact".to_string()] > 0.0);
    }

    #[test]
    fn test_term_frequency_scales_weight() {
        let docs = vec![doc("rust systems language"), doc("python scripting")];

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&docs);

        let once = vectorizer.vectorize(&["rust".to_string()]);
        let thrice = vectorizer.vectorize(&[
            "rust".to_string(),
            "rust".to_string(),
            "rust".to_string(),
        ]);

        let w1 = once[&"rust".to_string()];
        let w3 = thrice[&"rust".to_string()];
        assert!((w3 - 3.0 * w1).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_vocabulary_tokens_dropped() {
        let docs = vec![doc("known words only")];

        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&docs);

        let vec = vectorizer.vectorize(&["unseen".to_string(), "known".to_string()]);
        assert!(!vec.contains_key("unseen"));
        assert!(vec.contains_key("known"));
    }

    #[test]
    fn test_compute_idf_replaces_prior_table() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&[doc("old vocabulary here")]);
        assert!(vectorizer.vectorize(&["old".to_string()]).contains_key("old"));

        vectorizer.compute_idf(&[doc("new words entirely")]);
        assert!(vectorizer.vectorize(&["old".to_string()]).is_empty());
        assert_eq!(vectorizer.vocabulary_len(), 3);
    }

    #[test]
    fn test_empty_corpus_yields_empty_vectors() {
        let mut vectorizer = TfIdfVectorizer::new();
        vectorizer.compute_idf(&[]);

        assert_eq!(vectorizer.vocabulary_len(), 0);
        assert!(vectorizer.vectorize(&["anything".to_string()]).is_empty());
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = HashMap::from([
            ("alpha".to_string(), 1.5f32),
            ("beta".to_string(), 0.5),
            ("gamma".to_string(), 2.0),
        ]);

        let sim = cosine_similarity(&v, &v);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_disjoint_supports() {
        let a = HashMap::from([("alpha".to_string(), 1.0f32)]);
        let b = HashMap::from([("beta".to_string(), 1.0f32)]);

        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero_not_nan() {
        let zero: HashMap<String, f32> = HashMap::new();
        let v = HashMap::from([("alpha".to_string(), 1.0f32)]);

        let sim = cosine_similarity(&zero, &v);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());

        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_equal_content_vectors_score_bit_identically() {
        // Two maps with the same entries but different insertion histories
        // iterate in different orders; summation order must not leak into
        // the score or equal chunks could miss the exact-tie path.
        let entries = [
            ("alpha", 0.3f32),
            ("beta", 1.7),
            ("gamma", 0.9),
            ("delta", 2.2),
            ("epsilon", 0.11),
            ("zeta", 3.05),
            ("eta", 0.42),
        ];

        let forward: HashMap<String, f32> = entries
            .iter()
            .map(|(t, w)| (t.to_string(), *w))
            .collect();
        let reversed: HashMap<String, f32> = entries
            .iter()
            .rev()
            .map(|(t, w)| (t.to_string(), *w))
            .collect();
        let query = HashMap::from([
            ("beta".to_string(), 1.0f32),
            ("delta".to_string(), 0.5),
            ("eta".to_string(), 2.0),
        ]);

        let a = cosine_similarity(&forward, &query);
        let b = cosine_similarity(&reversed, &query);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = HashMap::from([("alpha".to_string(), 2.0f32), ("beta".to_string(), 1.0)]);
        let b = HashMap::from([("beta".to_string(), 3.0f32), ("gamma".to_string(), 1.0)]);

        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        assert!((ab - ba).abs() < 1e-6);
        assert!(ab > 0.0 && ab < 1.0);
    }
}
