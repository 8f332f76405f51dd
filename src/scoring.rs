// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: a tf-idf-style score per matching document, plus small
//! title/url substring bonuses, normalized by document length.

use crate::index::Index;

/// Bonus added when a query term's stem appears as a substring of the
/// document's raw title.
pub const TITLE_BONUS: f64 = 0.35;

/// Bonus added when a query term's stem appears as a substring of the
/// document's raw url.
pub const URL_BONUS: f64 = 0.15;

/// `score(d) = (sum over present query terms t of
/// (1 + ln(tf(t,d))) * (ln((N+1)/(df(t)+1)) + 1)
/// + TITLE_BONUS * [stem substring of title]
/// + URL_BONUS * [stem substring of url])
/// / sqrt(length(d))` (or just the numerator, if `length(d) == 0`).
///
/// The title/url check compares the *stemmed* query term against the
/// *raw*, unstemmed title/url text - an intentionally imperfect match
/// (a stem like "gener" will substring-match "generate" but also
/// "degeneracy"), kept as-is rather than stemming the title/url too.
pub fn score(index: &Index, doc_id: u32, query_stems: &[String]) -> f64 {
    let n = index.doc_count() as f64;
    let title = index.title(doc_id).to_lowercase();
    let url = index.url(doc_id).to_lowercase();

    let mut numerator = 0.0;
    for stem in query_stems {
        let tf = index.tf(stem, doc_id);
        if tf == 0 {
            continue;
        }
        let df = index.df(stem) as f64;
        let tf_weight = 1.0 + (tf as f64).ln();
        let idf_weight = ((n + 1.0) / (df + 1.0)).ln() + 1.0;
        numerator += tf_weight * idf_weight;

        if title.contains(stem.as_str()) {
            numerator += TITLE_BONUS;
        }
        if url.contains(stem.as_str()) {
            numerator += URL_BONUS;
        }
    }

    let length = index.length(doc_id);
    if length == 0 {
        numerator
    } else {
        numerator / (length as f64).sqrt()
    }
}

/// Sort `doc_ids` by score descending, doc_id ascending as a tie-break,
/// using a stable sort so ties beyond that (there shouldn't be any,
/// since doc_id is a total order) keep their relative input order.
pub fn rank(index: &Index, doc_ids: &[u32], query_stems: &[String]) -> Vec<(u32, f64)> {
    let mut scored: Vec<(u32, f64)> = doc_ids
        .iter()
        .map(|&id| (id, score(index, id, query_stems)))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored
}
