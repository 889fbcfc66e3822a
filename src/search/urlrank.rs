//! Lexical relevance ranking over candidate link URLs.
//!
//! Decides which of a page's links are worth pulling in for a question by
//! comparing the question's tokens against keywords derived from each URL's
//! path component. This is a lexical-overlap heuristic, not semantic
//! matching: a URL whose path segment exactly matches a salient question
//! word ("contact" in "How do I contact support?") outranks URLs with no
//! matching segment.

use crate::tokenize::tokenize;
use std::collections::HashSet;
use tracing::{debug, instrument};
use url::Url;

/// Ranks candidate URLs by lexical relevance to a question.
///
/// The question is tokenized with the prose tokenizer; each URL's path is
/// reduced to the same kind of token set (path separators `/`, `-`, `_`,
/// `.` and digits all split under the non-letter test). A URL scores one
/// point per path keyword found in the question's token set.
///
/// Returns at most `top_k` URLs, best match first. The sort is stable, so
/// equally scored candidates keep their original input order and the
/// result is deterministic. Unparseable candidates and URLs with no path
/// keywords score zero but are still ranked, never dropped early.
#[instrument(skip_all, fields(candidates = urls.len(), top_k))]
pub fn rank_urls(urls: &[String], question: &str, top_k: usize) -> Vec<String> {
    let question_terms: HashSet<String> = tokenize(question).into_iter().collect();

    let mut scored: Vec<(&String, usize)> = urls
        .iter()
        .map(|candidate| {
            let score = path_keywords(candidate)
                .iter()
                .filter(|keyword| question_terms.contains(*keyword))
                .count();
            (candidate, score)
        })
        .collect();

    // Stable sort: ties preserve input order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        best_score = scored.first().map(|(_, s)| *s).unwrap_or(0),
        "Ranked candidate URLs"
    );

    scored
        .into_iter()
        .take(top_k)
        .map(|(candidate, _)| candidate.clone())
        .collect()
}

/// Derives the keyword set for a candidate URL from its path component.
///
/// Absolute URLs are parsed directly; relative candidates are resolved
/// against a dummy base so their path can still be extracted. If neither
/// parse succeeds the raw string is tokenized as a last resort.
fn path_keywords(candidate: &str) -> Vec<String> {
    let path = match Url::parse(candidate) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => Url::parse("https://relative.invalid/")
            .ok()
            .and_then(|base| base.join(candidate).ok())
            .map(|resolved| resolved.path().to_string())
            .unwrap_or_else(|| candidate.to_string()),
    };

    tokenize(&path)
}
