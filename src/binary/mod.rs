// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The on-disk index layout: four files, no header.
//!
//! - `vocabulary.txt` - one `term_id term doc_freq` line per term, dense
//!   term ids `0..V` in write order.
//! - `index.bin` - binary, **little-endian** `i32` fields: for each
//!   vocabulary line in order, a `list_size`, then that many
//!   `(doc_id, tf)` pairs.
//! - `documents.txt` - one `doc_id\turl\ttitle` line per document, dense
//!   `0..=max_doc_id`; holes have empty url/title. Lines are split on
//!   tab, never on whitespace, since a url or title may itself contain a
//!   space.
//! - `doc_lengths.txt` - one integer per line, `length[doc_id]`.
//!
//! The builder and the loader agree on byte order (little-endian) and
//! integer width (`i32`) by construction; there is no magic number or
//! version field to check, so a file from an incompatible build would
//! simply misparse. That tradeoff is deliberate: the four-file layout is
//! the contract under test, and a wrapper header buys nothing a human
//! operator can't get from `ibex inspect`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::types::{DocumentStore, Posting};

fn write_err(path: &Path) -> impl Fn(std::io::Error) -> IndexError + '_ {
    move |source| IndexError::WriteFile {
        path: path.to_path_buf(),
        source,
    }
}

fn read_err(path: &Path) -> impl Fn(std::io::Error) -> IndexError + '_ {
    move |source| IndexError::ReadStream {
        path: path.to_path_buf(),
        source,
    }
}

pub fn write_vocabulary(dir: &Path, terms: &[(String, Vec<Posting>)]) -> Result<()> {
    let path = dir.join("vocabulary.txt");
    let file = File::create(&path).map_err(write_err(&path))?;
    let mut w = BufWriter::new(file);
    for (term_id, (term, postings)) in terms.iter().enumerate() {
        writeln!(w, "{} {} {}", term_id, term, postings.len()).map_err(write_err(&path))?;
    }
    Ok(())
}

pub fn write_index(dir: &Path, terms: &[(String, Vec<Posting>)]) -> Result<()> {
    let path = dir.join("index.bin");
    let file = File::create(&path).map_err(write_err(&path))?;
    let mut w = BufWriter::new(file);
    for (_, postings) in terms {
        w.write_all(&(postings.len() as i32).to_le_bytes())
            .map_err(write_err(&path))?;
        for p in postings {
            w.write_all(&(p.doc_id as i32).to_le_bytes())
                .map_err(write_err(&path))?;
            w.write_all(&(p.tf as i32).to_le_bytes())
                .map_err(write_err(&path))?;
        }
    }
    Ok(())
}

pub fn write_documents(dir: &Path, docs: &DocumentStore) -> Result<()> {
    let path = dir.join("documents.txt");
    let file = File::create(&path).map_err(write_err(&path))?;
    let mut w = BufWriter::new(file);
    for doc_id in 0..docs.len() {
        writeln!(w, "{}\t{}\t{}", doc_id, docs.url[doc_id], docs.title[doc_id])
            .map_err(write_err(&path))?;
    }
    Ok(())
}

pub fn write_doc_lengths(dir: &Path, lengths: &[u32]) -> Result<()> {
    let path = dir.join("doc_lengths.txt");
    let file = File::create(&path).map_err(write_err(&path))?;
    let mut w = BufWriter::new(file);
    for len in lengths {
        writeln!(w, "{}", len).map_err(write_err(&path))?;
    }
    Ok(())
}

/// A vocabulary line: `(term, doc_freq)`, in dense `term_id` order.
pub fn read_vocabulary(dir: &Path) -> Result<Vec<(String, u32)>> {
    let path = dir.join("vocabulary.txt");
    if !path.exists() {
        return Err(IndexError::MissingFile { path });
    }
    let file = File::open(&path).map_err(read_err(&path))?;
    let mut out = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err(&path))?;
        let mut parts = line.splitn(3, ' ');
        let _term_id = parts.next();
        let term = parts.next().ok_or_else(|| IndexError::Corrupt {
            path: path.clone(),
            reason: format!("malformed vocabulary line: {line:?}"),
        })?;
        let doc_freq: u32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IndexError::Corrupt {
                path: path.clone(),
                reason: format!("malformed vocabulary line: {line:?}"),
            })?;
        out.push((term.to_string(), doc_freq));
    }
    Ok(out)
}

/// Read `index.bin`, returning one posting list per vocabulary entry, in
/// vocabulary order.
pub fn read_index(dir: &Path, vocab_len: usize) -> Result<Vec<Vec<Posting>>> {
    let path = dir.join("index.bin");
    if !path.exists() {
        return Err(IndexError::MissingFile { path });
    }
    let mut file = File::open(&path).map_err(read_err(&path))?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(read_err(&path))?;

    let mut cursor = 0usize;
    let mut read_i32 = |cursor: &mut usize| -> Result<i32> {
        let end = *cursor + 4;
        let bytes: [u8; 4] =
            buf.get(*cursor..end)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(|| IndexError::Corrupt {
                    path: path.clone(),
                    reason: "index.bin truncated".to_string(),
                })?;
        *cursor = end;
        Ok(i32::from_le_bytes(bytes))
    };

    let mut lists = Vec::with_capacity(vocab_len);
    for _ in 0..vocab_len {
        let list_size = read_i32(&mut cursor)?;
        if list_size < 0 {
            return Err(IndexError::Corrupt {
                path: path.clone(),
                reason: format!("negative list_size {list_size}"),
            });
        }
        let mut postings = Vec::with_capacity(list_size as usize);
        for _ in 0..list_size {
            let doc_id = read_i32(&mut cursor)?;
            let tf = read_i32(&mut cursor)?;
            postings.push(Posting {
                doc_id: doc_id as u32,
                tf: tf as u32,
            });
        }
        lists.push(postings);
    }
    Ok(lists)
}

/// Read `documents.txt`, returning parallel dense `(url, title)` arrays.
pub fn read_documents(dir: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let path = dir.join("documents.txt");
    if !path.exists() {
        return Err(IndexError::MissingFile { path });
    }
    let file = File::open(&path).map_err(read_err(&path))?;
    let mut urls = Vec::new();
    let mut titles = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err(&path))?;
        let mut parts = line.splitn(3, '\t');
        let _doc_id = parts.next();
        let url = parts.next().unwrap_or("").to_string();
        let title = parts.next().unwrap_or("").to_string();
        urls.push(url);
        titles.push(title);
    }
    Ok((urls, titles))
}

/// Read `doc_lengths.txt`. A missing file is tolerated: lengths default
/// to zero for every document. A present file must have one line per
/// document.
pub fn read_doc_lengths(dir: &Path, doc_count: usize) -> Result<Vec<u32>> {
    let path = dir.join("doc_lengths.txt");
    if !path.exists() {
        return Ok(vec![0; doc_count]);
    }
    let file = File::open(&path).map_err(read_err(&path))?;
    let mut lengths = Vec::with_capacity(doc_count);
    for line in BufReader::new(file).lines() {
        let line = line.map_err(read_err(&path))?;
        let len: u32 = line.trim().parse().map_err(|_| IndexError::Corrupt {
            path: path.clone(),
            reason: format!("non-integer doc length: {line:?}"),
        })?;
        lengths.push(len);
    }
    Ok(lengths)
}
