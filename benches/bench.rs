//! Criterion benchmarks for keylookup.
//!
//! Covers word normalization, n-gram expansion with several gram ranges,
//! and batch analysis of many short keys.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keylookup::analysis::analyzer::{Analyzer, NGramAnalyzer, Normalizer};
use rayon::prelude::*;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "Kathmandu",
        "Pokhara",
        "Lalitpur",
        "Bhaktapur",
        "Biratnagar",
        "hotel",
        "guest",
        "house",
        "trek",
        "Annapurna",
        "Everest",
        "base",
        "camp",
        "Größe",
        "東京",
        "ÉCOLE",
        "a1",
        "B2B",
        "route-66",
        "Zürich",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 3 + (i % 12);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        documents.push(doc_words.join(" "));
    }
    documents
}

/// Benchmark word normalization without n-gram expansion.
fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer");

    let normalizer = Normalizer::new();
    let texts = generate_test_documents(1000);

    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let count = normalizer.analyze(black_box(&texts[0])).map(|s| s.count());
            black_box(count)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let count = normalizer.analyze(black_box(text)).map(|s| s.count());
                let _ = black_box(count);
            }
        })
    });

    group.finish();
}

/// Benchmark n-gram expansion for several gram ranges.
fn bench_ngram_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("ngram_analysis");

    let texts = generate_test_documents(1000);

    for (min_gram, max_gram) in [(2, 2), (3, 5), (1, 10)] {
        let analyzer = NGramAnalyzer::with_grams(min_gram, max_gram, true).unwrap();

        group.throughput(Throughput::Elements(100));
        group.bench_with_input(
            BenchmarkId::new("grams", format!("{min_gram}-{max_gram}")),
            &analyzer,
            |b, analyzer| {
                b.iter(|| {
                    for text in texts.iter().take(100) {
                        let count = analyzer.analyze(black_box(text)).map(|s| s.count());
                        let _ = black_box(count);
                    }
                })
            },
        );
    }

    group.finish();
}

/// Benchmark sequential against parallel batch analysis.
fn bench_parallel_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_analysis");
    group.sample_size(20);

    let analyzer = NGramAnalyzer::default();
    let texts = generate_test_documents(10_000);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            let total: usize = texts
                .iter()
                .map(|text| analyzer.analyze(text).map(|s| s.count()).unwrap_or(0))
                .sum();
            black_box(total)
        })
    });

    group.bench_function("rayon", |b| {
        b.iter(|| {
            let total: usize = texts
                .par_iter()
                .map(|text| analyzer.analyze(text).map(|s| s.count()).unwrap_or(0))
                .sum();
            black_box(total)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalizer,
    bench_ngram_analysis,
    bench_parallel_analysis
);

criterion_main!(benches);
