//! Benchmarks for lookup strategies (linear, binary, recursive binary).
//!
//! Run with: `cargo bench -p bookfind-core --bench search`
//!
//! These benchmarks measure the performance of:
//! - Single lookups per strategy across catalog sizes
//! - Batch lookups through the catalog driver (sequential and rayon)
//! - The one-time catalog sort

use bookfind_core::record::Record;
use bookfind_core::search::SearchStrategy;
use bookfind_core::Catalog;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

// =============================================================================
// Benchmark Configuration
// =============================================================================

const CATALOG_SIZES: [u64; 4] = [100, 1_000, 10_000, 100_000];

const LANGUAGES: [&str; 4] = ["english", "french", "german", "spanish"];

const CATEGORIES: [&str; 4] = ["new", "used", "digital", "rare"];

/// First identifier handed out, shaped like a 13-digit ISBN.
const ISBN_BASE: u64 = 9_780_000_000_000;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Deterministic record for a seed. Every fourth identifier is shared by two
/// records so the halving strategies have to disambiguate on category.
fn seeded_record(seed: u64) -> Record {
    let identifier = ISBN_BASE + seed - (seed % 4 == 1) as u64;
    let language = LANGUAGES[(seed % LANGUAGES.len() as u64) as usize];
    let category = CATEGORIES[((seed / 2) % CATEGORIES.len() as u64) as usize];
    Record::new(language, category, identifier)
}

fn build_catalog(size: u64) -> Catalog {
    Catalog::new((0..size).rev().map(seeded_record).collect())
}

/// Half hits, half misses (identifiers past the end of the catalog).
fn build_queries(size: u64, count: u64) -> Vec<Record> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                seeded_record((i * 7919) % size)
            } else {
                seeded_record(size + i)
            }
        })
        .collect()
}

// ============================================================================
// Single Lookup Benchmarks
// ============================================================================

/// Benchmark: one hit per strategy with varying catalog sizes
///
/// Linear should scale with n, the halving strategies with log n.
fn bench_lookup_by_size(c: &mut Criterion) {
    for strategy in SearchStrategy::ALL {
        let mut group = c.benchmark_group(format!("lookup/{}", strategy.token()));
        group.sample_size(100);

        for size in CATALOG_SIZES {
            let catalog = build_catalog(size);
            let query = seeded_record(size * 3 / 4);

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
                b.iter(|| strategy.search(catalog.records(), black_box(&query)));
            });
        }
        group.finish();
    }
}

/// Benchmark: worst case for each strategy, a query that matches nothing
fn bench_lookup_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup/miss");
    let size = 10_000;
    let catalog = build_catalog(size);
    let query = Record::new("latin", "rare", ISBN_BASE + size * 2);

    for strategy in SearchStrategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.token()),
            &strategy,
            |b, &strategy| {
                b.iter(|| strategy.search(catalog.records(), black_box(&query)));
            },
        );
    }
    group.finish();
}

// ============================================================================
// Batch Benchmarks
// ============================================================================

/// Benchmark: a full request batch through the catalog driver
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);

    let size = 10_000;
    let query_count = 1_000;
    let catalog = build_catalog(size);
    let queries = build_queries(size, query_count);

    group.throughput(Throughput::Elements(query_count));
    for strategy in SearchStrategy::ALL {
        group.bench_with_input(
            BenchmarkId::new("sequential", strategy.token()),
            &strategy,
            |b, &strategy| {
                b.iter(|| catalog.count_matches(black_box(&queries), strategy));
            },
        );
        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", strategy.token()),
            &strategy,
            |b, &strategy| {
                b.iter(|| catalog.count_matches_parallel(black_box(&queries), strategy));
            },
        );
    }
    group.finish();
}

/// Benchmark: one-time sort cost paid before the halving strategies can run
fn bench_catalog_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/sort");
    group.sample_size(10);

    for size in CATALOG_SIZES {
        let records: Vec<Record> = (0..size).rev().map(seeded_record).collect();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| Catalog::new(black_box(records.clone())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_lookup_by_size,
    bench_lookup_miss,
    bench_batch,
    bench_catalog_sort,
);

criterion_main!(benches);
