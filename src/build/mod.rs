// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index builder: accumulates documents in memory, then writes the
//! four on-disk files in one shot.
//!
//! IO failures while reading the stream or writing the index are fatal
//! (see [`crate::error::IndexError`]); a malformed or undersized record
//! within the stream is not - it is counted in [`crate::types::Stats`]
//! and the build continues.

pub mod document;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analyzer;
use crate::binary;
use crate::error::{IndexError, Result};
use crate::types::{DocumentStore, Posting, Stats};
use crate::zipf::ZipfCounter;

/// Builds an in-memory inverted index, one document at a time.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    documents: DocumentStore,
    terms: HashMap<String, Vec<Posting>>,
    zipf: ZipfCounter,
    stats: Stats,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document. Growing the document arrays past `doc_id`
    /// leaves holes (empty url/title, zero length) for any slots that
    /// were never written. Not reentrant: callers must not call this
    /// concurrently with another `add_document` or with `save`.
    pub fn add_document(&mut self, doc_id: u32, url: &str, title: &str, text: &str) {
        let idx = doc_id as usize;
        self.documents.ensure_capacity(idx);
        self.documents.url[idx] = url.to_string();
        self.documents.title[idx] = title.to_string();
        self.documents.present[idx] = true;

        let tokens = analyzer::analyze(text);
        self.documents.length[idx] = tokens.len() as u32;
        self.stats.tokens += tokens.len();

        let mut tf: HashMap<String, u32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.stem.clone()).or_insert(0) += 1;
            self.zipf.record(&tok.stem);
        }
        for (stem, count) in tf {
            self.terms
                .entry(stem)
                .or_default()
                .push(Posting { doc_id, tf: count });
        }

        self.stats.documents += 1;
    }

    /// Read a JSON-lines documents stream and add every valid record.
    ///
    /// Tokenization of the batch fans out over `rayon` when the
    /// `parallel` feature is enabled; the accumulation into posting
    /// lists and the zipf counter stays single-threaded and
    /// order-preserving either way.
    pub fn build_from_stream<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IndexError::ReadStream {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| IndexError::ReadStream {
                path: path.to_path_buf(),
                source,
            })?;
            self.stats.bytes_read += line.len() as u64 + 1;
            match document::parse_record(&line) {
                Some(rec) => records.push(rec),
                None => self.stats.skipped_records += 1,
            }
        }

        #[cfg(feature = "parallel")]
        let progress = indicatif::ProgressBar::new(records.len() as u64);
        #[cfg(feature = "parallel")]
        progress.set_style(
            indicatif::ProgressStyle::with_template("{bar:40} {pos}/{len} documents")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar()),
        );

        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        let analyzed = analyze_many(&texts);

        for (rec, tokens) in records.into_iter().zip(analyzed) {
            // doc_id was validated to be present in parse_record; a
            // negative or oversized value still has to be skipped here.
            let doc_id = match rec.doc_id.and_then(|id| u32::try_from(id).ok()) {
                Some(id) => id,
                None => {
                    self.stats.skipped_records += 1;
                    continue;
                }
            };

            let idx = doc_id as usize;
            self.documents.ensure_capacity(idx);
            self.documents.url[idx] = rec.url;
            self.documents.title[idx] = rec.title;
            self.documents.present[idx] = true;
            self.documents.length[idx] = tokens.len() as u32;
            self.stats.tokens += tokens.len();

            let mut tf: HashMap<String, u32> = HashMap::new();
            for tok in &tokens {
                *tf.entry(tok.stem.clone()).or_insert(0) += 1;
                self.zipf.record(&tok.stem);
            }
            for (stem, count) in tf {
                self.terms
                    .entry(stem)
                    .or_default()
                    .push(Posting { doc_id, tf: count });
            }
            self.stats.documents += 1;

            #[cfg(feature = "parallel")]
            progress.inc(1);
        }

        #[cfg(feature = "parallel")]
        progress.finish_and_clear();

        Ok(())
    }

    /// Write the four on-disk files (see `crate::binary`) plus the Zipf
    /// frequency report, into `dir` (created if missing).
    ///
    /// Posting lists are sorted by `doc_id` here, regardless of the
    /// order `add_document` was called in - that order is the only
    /// thing the four files' consumers are allowed to rely on.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| IndexError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut terms: Vec<(&String, &Vec<Posting>)> = self.terms.iter().collect();
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let mut sorted_terms: Vec<(String, Vec<Posting>)> = Vec::with_capacity(terms.len());
        for (term, postings) in terms {
            let mut postings = postings.clone();
            postings.sort_by_key(|p| p.doc_id);
            debug_assert!(
                postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id),
                "duplicate doc_id in posting list for term {term:?}: the same document must \
                 only ever be recorded once per term"
            );
            sorted_terms.push((term.clone(), postings));
        }

        binary::write_vocabulary(dir, &sorted_terms)?;
        binary::write_index(dir, &sorted_terms)?;
        binary::write_documents(dir, &self.documents)?;
        binary::write_doc_lengths(dir, &self.documents.length)?;
        self.zipf.write_csv(dir.join("zipf_stats.csv"))?;

        Ok(())
    }

    /// Non-load-bearing build counters. `distinct_stems` is the current
    /// vocabulary size, computed on access rather than tracked
    /// incrementally.
    pub fn stats(&self) -> Stats {
        Stats {
            distinct_stems: self.terms.len(),
            ..self.stats.clone()
        }
    }
}

#[cfg(feature = "parallel")]
fn analyze_many(texts: &[&str]) -> Vec<Vec<analyzer::Token>> {
    use rayon::prelude::*;
    texts.par_iter().map(|t| analyzer::analyze(t)).collect()
}

#[cfg(not(feature = "parallel"))]
fn analyze_many(texts: &[&str]) -> Vec<Vec<analyzer::Token>> {
    texts.iter().map(|t| analyzer::analyze(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn add_document_records_length_and_postings() {
        let mut b = IndexBuilder::new();
        b.add_document(0, "http://a", "A", "running runs ran");
        assert_eq!(b.stats().documents, 1);
        assert_eq!(b.documents.length[0], 3);
        assert!(b.terms.contains_key("run"));
    }

    #[test]
    fn length_counts_post_filter_tokens_not_raw_surface_tokens() {
        let mut b = IndexBuilder::new();
        // 10 surface tokens ("the", "vault", "dweller", "found", "a",
        // "pip", "boy", "in", "the", "vault"), but "the"/"a"/"in" are
        // stop words - length must count only the 6 that reach the tf
        // map: vault, dweller, found, pip, boy, vault.
        b.add_document(
            0,
            "http://a",
            "A",
            "The vault dweller found a pip-boy in the vault.",
        );
        assert_eq!(b.documents.length[0], 6);
    }

    #[test]
    fn save_sorts_posting_lists_regardless_of_call_order() {
        let mut b = IndexBuilder::new();
        b.add_document(
            3,
            "http://c",
            "C",
            "the raiders attacked the vault dwellers near the entrance gate",
        );
        b.add_document(
            1,
            "http://a",
            "A",
            "the raiders stole nuka cola from the vault storage room",
        );
        let dir = tempfile::tempdir().unwrap();
        b.save(dir.path()).unwrap();
        let index_dir = crate::index::Index::load(dir.path()).unwrap();
        let postings = index_dir.lookup("raider").unwrap();
        let ids: Vec<u32> = postings.postings.iter().map(|p| p.doc_id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn build_from_stream_skips_invalid_lines() {
        let dir = tempfile::tempdir().unwrap();
        let stream_path = dir.path().join("docs.jsonl");
        let mut f = File::create(&stream_path).unwrap();
        writeln!(
            f,
            r#"{{"doc_id": 0, "url": "u0", "title": "t0", "text": "the vault door stays sealed tight against the wasteland radiation outside"}}"#
        )
        .unwrap();
        writeln!(f, "not json at all").unwrap();
        writeln!(f, r#"{{"url": "u1", "title": "t1", "text": "missing a doc id entirely but otherwise long enough text here"}}"#).unwrap();
        writeln!(f, r#"{{"doc_id": 2, "url": "u2", "title": "t2", "text": "short"}}"#).unwrap();

        let mut b = IndexBuilder::new();
        b.build_from_stream(&stream_path).unwrap();
        assert_eq!(b.stats().documents, 1);
        assert_eq!(b.stats().skipped_records, 3);
    }
}
