// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: lex, parse to RPN, evaluate, rank, and truncate to
//! the top 100 results.

pub mod eval;
pub mod lexer;
pub mod parser;

use crate::index::Index;
use crate::scoring;
use crate::types::SearchResult;

/// Results are never larger than this, regardless of how many documents
/// matched.
pub const MAX_RESULTS: usize = 100;

/// The outcome of a single search: the (possibly truncated) ranked
/// results, and the total match count before truncation.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub total_matches: usize,
}

/// Parse, evaluate, and rank `query_text` against `index`. Never fails -
/// a malformed query degrades to a best-effort (possibly empty) result.
pub fn search(index: &Index, query_text: &str) -> SearchOutcome {
    let rpn = parser::parse(query_text);
    let matches = eval::evaluate(index, &rpn);
    let stems = eval::scoring_terms(&rpn);
    let ranked = scoring::rank(index, &matches, &stems);

    let total_matches = ranked.len();
    let results = ranked
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(doc_id, score)| SearchResult {
            doc_id,
            url: index.url(doc_id).to_string(),
            title: index.title(doc_id).to_string(),
            score,
        })
        .collect();

    SearchOutcome {
        results,
        total_matches,
    }
}
