// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the configuration/IO failure class (see `DESIGN.md`,
//! error handling section). Record-level and query-level failures never
//! reach these types - they are handled by skipping or by degenerate
//! results, never by raising an error.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures building or loading an index. These are always
/// unrecoverable: the caller should report the diagnostic and exit
/// non-zero, not retry.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read document stream {path}: {source}")]
    ReadStream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write index file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create index directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required index file: {path}")]
    MissingFile { path: PathBuf },

    #[error("corrupt index file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, IndexError>;
