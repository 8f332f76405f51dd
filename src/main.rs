// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;

use ibex::build::IndexBuilder;
use ibex::cli::{Cli, Commands};
use ibex::index::Index;
use ibex::query;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Index { input, output } => run_index(input, output),
        Commands::Search { index_dir } => run_search(index_dir),
        Commands::Inspect { dir } => run_inspect(dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run_index(input: std::path::PathBuf, output: std::path::PathBuf) -> ibex::error::Result<()> {
    let start = Instant::now();
    let mut builder = IndexBuilder::new();
    builder.build_from_stream(&input)?;
    builder.save(&output)?;

    let stats = builder.stats();
    println!(
        "Build complete: {} documents, {} skipped, {} tokens, {} distinct stems, {} bytes read, {:.2}s",
        stats.documents,
        stats.skipped_records,
        stats.tokens,
        stats.distinct_stems,
        stats.bytes_read,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run_search(index_dir: std::path::PathBuf) -> ibex::error::Result<()> {
    let index = Index::load(&index_dir)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_default();
        let query_text = line.trim();
        if query_text.is_empty() {
            continue;
        }

        let start = Instant::now();
        let outcome = query::search(&index, query_text);
        let elapsed_ms = start.elapsed().as_millis();

        writeln!(
            out,
            "Found {} documents ({} ms):",
            outcome.total_matches, elapsed_ms
        )
        .ok();
        for r in &outcome.results {
            writeln!(out, "{}\t{}\t{}", r.doc_id, r.url, r.title).ok();
        }
        if outcome.total_matches > outcome.results.len() {
            writeln!(
                out,
                "... and {} more results",
                outcome.total_matches - outcome.results.len()
            )
            .ok();
        }
    }
    Ok(())
}

fn run_inspect(dir: std::path::PathBuf) -> ibex::error::Result<()> {
    let index = Index::load(&dir)?;
    println!("documents: {}", index.doc_count());
    println!("vocabulary: {}", index.term_count());
    for name in [
        "vocabulary.txt",
        "index.bin",
        "documents.txt",
        "doc_lengths.txt",
        "zipf_stats.csv",
    ] {
        let path = dir.join(name);
        match std::fs::metadata(&path) {
            Ok(meta) => println!("{name}: {} bytes", meta.len()),
            Err(_) => println!("{name}: (missing)"),
        }
    }
    Ok(())
}
