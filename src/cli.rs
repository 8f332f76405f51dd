// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface: `ibex index`, `ibex search`, `ibex inspect`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ibex", about = "A boolean full-text search engine", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an index from a JSON-lines documents stream.
    Index {
        /// Path to the documents stream (one JSON object per line).
        #[arg(long)]
        input: PathBuf,

        /// Directory to write the four index files (and the Zipf
        /// report) into. Created if it doesn't exist.
        #[arg(long)]
        output: PathBuf,
    },

    /// Load an index and answer queries typed on stdin, one per line.
    Search {
        /// Directory holding a previously built index.
        #[arg(long = "index")]
        index_dir: PathBuf,
    },

    /// Print summary statistics about a built index without loading it
    /// for search. Not part of the core contract - purely operational.
    Inspect {
        /// Directory holding a previously built index.
        dir: PathBuf,
    },
}
