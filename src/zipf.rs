// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Zipf frequency report: an informational collaborator contract,
//! not part of the core index. Counts every stem the analyzer produces
//! during a build and writes the top 10,000 by frequency to a CSV.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{IndexError, Result};

/// Maximum number of rows written to `zipf_stats.csv`.
pub const MAX_ROWS: usize = 10_000;

#[derive(Debug, Default)]
pub struct ZipfCounter {
    counts: HashMap<String, u64>,
}

impl ZipfCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `stem`.
    pub fn record(&mut self, stem: &str) {
        *self.counts.entry(stem.to_string()).or_insert(0) += 1;
    }

    /// Write `rank,frequency,term` sorted by frequency descending, tied
    /// broken by term ascending for a stable, reproducible order, capped
    /// at [`MAX_ROWS`] rows.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut rows: Vec<(&String, &u64)> = self.counts.iter().collect();
        rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let file = File::create(path).map_err(|source| IndexError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut w = BufWriter::new(file);
        let write = |w: &mut BufWriter<File>| -> std::io::Result<()> {
            writeln!(w, "rank,frequency,term")?;
            for (rank, (term, freq)) in rows.iter().take(MAX_ROWS).enumerate() {
                writeln!(w, "{},{},{}", rank + 1, freq, term)?;
            }
            Ok(())
        };
        write(&mut w).map_err(|source| IndexError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_frequency_then_term() {
        let mut z = ZipfCounter::new();
        for _ in 0..3 {
            z.record("vault");
        }
        for _ in 0..3 {
            z.record("nuka");
        }
        z.record("raider");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf_stats.csv");
        z.write_csv(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "rank,frequency,term");
        // "nuka" sorts before "vault" on the tied frequency=3 count.
        assert_eq!(lines.next().unwrap(), "1,3,nuka");
        assert_eq!(lines.next().unwrap(), "2,3,vault");
        assert_eq!(lines.next().unwrap(), "3,1,raider");
    }

    #[test]
    fn caps_at_max_rows() {
        let mut z = ZipfCounter::new();
        for i in 0..(MAX_ROWS + 50) {
            z.record(&format!("term{i}"));
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zipf_stats.csv");
        z.write_csv(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), MAX_ROWS + 1);
    }
}
