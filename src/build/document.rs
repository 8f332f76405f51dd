// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing a single line of the documents stream (see `DESIGN.md`,
//! external interfaces section).

use crate::types::DocumentRecord;

/// Minimum `text` length, in bytes, for a record to be indexed.
pub const MIN_TEXT_BYTES: usize = 50;

/// Parse and validate one JSON-lines record.
///
/// Returns `None` for anything that should be silently skipped: invalid
/// JSON, a missing `doc_id`, or `text` shorter than [`MIN_TEXT_BYTES`]
/// (including a missing `text` field, which defaults to the empty
/// string). `serde_json` already understands the `\n \t \r \" \\`
/// escapes the record format requires.
pub fn parse_record(line: &str) -> Option<DocumentRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let record: DocumentRecord = serde_json::from_str(line).ok()?;
    if record.doc_id.is_none() {
        return None;
    }
    if record.text.len() < MIN_TEXT_BYTES {
        return None;
    }
    Some(record)
}
