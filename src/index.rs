// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index loader: reads the four on-disk files into an immutable,
//! in-memory [`Index`] ready for querying.
//!
//! A loaded `Index` holds no interior mutability, so concurrent
//! read-only queries over it are `Send + Sync` safe; nothing here is
//! ever mutated after `load` returns.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::types::{Posting, PostingList};

#[derive(Debug, Default)]
pub struct Index {
    terms: HashMap<String, PostingList>,
    urls: Vec<String>,
    titles: Vec<String>,
    lengths: Vec<u32>,
}

impl Index {
    /// Read `vocabulary.txt`, `index.bin`, `documents.txt`, and
    /// `doc_lengths.txt` from `dir`. A missing `doc_lengths.txt` is
    /// tolerated (lengths default to zero); a missing vocabulary, index,
    /// or documents file is fatal.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let vocab = crate::binary::read_vocabulary(dir)?;
        let lists = crate::binary::read_index(dir, vocab.len())?;
        let (urls, titles) = crate::binary::read_documents(dir)?;
        let lengths = crate::binary::read_doc_lengths(dir, urls.len())?;

        let mut terms = HashMap::with_capacity(vocab.len());
        for ((term, _doc_freq), postings) in vocab.into_iter().zip(lists) {
            debug_assert!(
                postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id),
                "posting list for {term:?} is not strictly ascending by doc_id on load"
            );
            terms.insert(term, PostingList { postings });
        }

        Ok(Self {
            terms,
            urls,
            titles,
            lengths,
        })
    }

    /// Total document count `N`, including holes.
    pub fn doc_count(&self) -> usize {
        self.urls.len()
    }

    /// Vocabulary size `V`.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn lookup(&self, stem: &str) -> Option<&PostingList> {
        self.terms.get(stem)
    }

    /// Document frequency of `stem`: 0 if the stem was never indexed.
    pub fn df(&self, stem: &str) -> usize {
        self.terms.get(stem).map_or(0, PostingList::df)
    }

    pub fn url(&self, doc_id: u32) -> &str {
        self.urls.get(doc_id as usize).map_or("", String::as_str)
    }

    pub fn title(&self, doc_id: u32) -> &str {
        self.titles.get(doc_id as usize).map_or("", String::as_str)
    }

    pub fn length(&self, doc_id: u32) -> u32 {
        self.lengths.get(doc_id as usize).copied().unwrap_or(0)
    }

    /// The doc_ids that are actually documents rather than holes: any
    /// slot with a non-zero recorded length. A hole - a `doc_id` that
    /// was never passed to `add_document` - always has length zero,
    /// since it was never tokenized; this is what `not` uses as its
    /// universe when there is nothing to its left.
    pub fn universe(&self) -> Vec<u32> {
        (0..self.lengths.len() as u32)
            .filter(|&id| self.lengths[id as usize] > 0)
            .collect()
    }

    /// Posting list projected to just its doc_ids, ascending. Used by the
    /// evaluator when it pushes a term operand.
    pub fn doc_ids_for(&self, stem: &str) -> Vec<u32> {
        self.lookup(stem)
            .map(|pl| pl.postings.iter().map(|p: &Posting| p.doc_id).collect())
            .unwrap_or_default()
    }

    pub fn tf(&self, stem: &str, doc_id: u32) -> u32 {
        self.lookup(stem)
            .and_then(|pl| {
                pl.postings
                    .binary_search_by_key(&doc_id, |p| p.doc_id)
                    .ok()
                    .map(|i| pl.postings[i].tf)
            })
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::IndexBuilder;

    #[test]
    fn round_trip_save_and_load_is_faithful() {
        let mut b = IndexBuilder::new();
        b.add_document(
            0,
            "http://vault",
            "Vault 111",
            "the vault dweller emerges from cryo into the ruined wasteland",
        );
        b.add_document(
            1,
            "http://nuka",
            "Nuka-Cola",
            "nuka cola is the signature soft drink of the wasteland",
        );
        let dir = tempfile::tempdir().unwrap();
        b.save(dir.path()).unwrap();

        let idx = Index::load(dir.path()).unwrap();
        assert_eq!(idx.doc_count(), 2);
        assert_eq!(idx.title(0), "Vault 111");
        assert_eq!(idx.url(1), "http://nuka");
        assert!(idx.df("wasteland") >= 2);
        assert_eq!(idx.universe(), vec![0, 1]);
    }
}
