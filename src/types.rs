// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the builder, the on-disk format, and the
//! query engine.

/// A single occurrence record: `doc_id` contains the term `tf` times.
///
/// Posting lists are always kept sorted ascending by `doc_id` - this is
/// the one invariant both the builder and the evaluator rely on, and
/// both assert it (debug-only) before doing anything with a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u32,
    pub tf: u32,
}

/// A term's posting list plus its cached document frequency
/// (`postings.len()`, but stored so callers don't need the whole list in
/// hand to know `df`).
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub postings: Vec<Posting>,
}

impl PostingList {
    pub fn df(&self) -> usize {
        self.postings.len()
    }

    /// True iff the list is strictly ascending by `doc_id` and every
    /// posting has `tf >= 1`. Checked with `debug_assert!` at the points
    /// that are supposed to guarantee it (`Index::save`, merge helpers).
    pub fn is_well_formed(&self) -> bool {
        self.postings.iter().all(|p| p.tf >= 1)
            && self
                .postings
                .windows(2)
                .all(|w| w[0].doc_id < w[1].doc_id)
    }
}

/// Per-document metadata, stored in dense arrays indexed by `doc_id`.
/// A "hole" - a `doc_id` that was never added - is represented by empty
/// strings and a length of zero; it is excluded from `not`'s universe of
/// documents (see `crate::query::eval`).
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    pub url: Vec<String>,
    pub title: Vec<String>,
    pub length: Vec<u32>,
    /// Which `doc_id` slots were actually written by `add_document`,
    /// as opposed to being holes created by growing the arrays.
    pub present: Vec<bool>,
}

impl DocumentStore {
    pub fn len(&self) -> usize {
        self.url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }

    /// Grow the arrays so that `doc_id` is a valid index, filling any new
    /// slots with holes.
    pub fn ensure_capacity(&mut self, doc_id: usize) {
        if doc_id >= self.url.len() {
            let new_len = doc_id + 1;
            self.url.resize(new_len, String::new());
            self.title.resize(new_len, String::new());
            self.length.resize(new_len, 0);
            self.present.resize(new_len, false);
        }
    }
}

/// A single parsed record from the documents stream (see `crate::build`).
#[derive(Debug, Clone, serde::Deserialize)]
pub struct DocumentRecord {
    pub doc_id: Option<i64>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// One row of a search result: a document and its computed score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub doc_id: u32,
    pub url: String,
    pub title: String,
    pub score: f64,
}

/// Non-load-bearing counters collected during a build, reported by
/// `IndexBuilder::stats` and printed by the CLI after `ibex index`.
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub documents: usize,
    pub skipped_records: usize,
    pub tokens: usize,
    pub distinct_stems: usize,
    pub bytes_read: u64,
}
