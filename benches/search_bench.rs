// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Criterion benchmarks for index building and boolean search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ibex::build::IndexBuilder;
use ibex::index::Index;
use ibex::query;

fn build_index(doc_count: u32) -> Index {
    let mut b = IndexBuilder::new();
    for i in 0..doc_count {
        b.add_document(
            i,
            &format!("http://example.com/{i}"),
            "Wasteland Settlement Report",
            "raiders and scavengers set up camps near the vault entrance after the war and trade nuka cola bottles with wandering settlers",
        );
    }
    let dir = tempfile::tempdir().expect("tempdir");
    b.save(dir.path()).expect("save");
    Index::load(dir.path()).expect("load")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_from_documents");
    for &doc_count in &[100u32, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(doc_count),
            &doc_count,
            |b, &doc_count| {
                b.iter(|| build_index(black_box(doc_count)));
            },
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = build_index(5_000);

    c.bench_function("search_single_term", |b| {
        b.iter(|| query::search(black_box(&index), black_box("vault")))
    });

    c.bench_function("search_and", |b| {
        b.iter(|| query::search(black_box(&index), black_box("vault and nuka")))
    });

    c.bench_function("search_boolean_combination", |b| {
        b.iter(|| {
            query::search(
                black_box(&index),
                black_box("(vault or nuka) and not raiders"),
            )
        })
    });
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
