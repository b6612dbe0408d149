//! Ranking benchmarks.
//!
//! The built-in catalog is what the site actually ships. The synthetic
//! catalogs show how ranking scales if a site grows to hundreds of records:
//! - small:  15 records (built-in)
//! - medium: 200 records
//! - large:  2000 records
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::{
    rank, rank_scored, Catalog, Category, Record, SearchOptions, SearchSession, DEFAULT_LIMIT,
};
use std::time::Duration;

// ============================================================================
// CATALOG SIMULATION
// ============================================================================

struct CatalogSize {
    name: &'static str,
    records: usize,
}

const CATALOG_SIZES: &[CatalogSize] = &[
    CatalogSize {
        name: "medium",
        records: 200,
    },
    CatalogSize {
        name: "large",
        records: 2000,
    },
];

/// Portfolio vocabulary so synthetic records look like real ones.
const WORDS: &[&str] = &[
    "data",
    "analytics",
    "dashboard",
    "python",
    "sql",
    "power",
    "bi",
    "machine",
    "learning",
    "forecast",
    "sales",
    "marketing",
    "pipeline",
    "report",
    "insight",
    "strategy",
    "consulting",
    "visualization",
    "model",
    "warehouse",
];

/// Deterministic word picker; no RNG so runs are comparable.
fn phrase(seed: usize, len: usize) -> String {
    (0..len)
        .map(|i| WORDS[(seed * 7 + i * 13) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn synthetic_catalog(size: &CatalogSize) -> Catalog {
    let records = (0..size.records)
        .map(|i| Record {
            id: format!("record-{}", i),
            title: phrase(i, 3),
            description: phrase(i + 1, 12),
            category: Category::ALL[i % Category::ALL.len()],
            url: format!("/records/{}", i),
            tags: (0..4).map(|t| phrase(i + t, 1)).collect(),
        })
        .collect();
    // Ids are unique by construction
    Catalog::new(records).unwrap()
}

const QUERIES: &[(&str, &str)] = &[
    ("1_term", "python"),
    ("2_terms", "power bi"),
    ("3_terms", "machine learning model"),
    ("no_match", "xyznomatch"),
    ("single_char", "a"),
];

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_builtin(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("builtin");

    for (name, query) in QUERIES {
        group.bench_with_input(BenchmarkId::new("rank", name), query, |b, query| {
            b.iter(|| rank(black_box(query), black_box(&catalog), DEFAULT_LIMIT));
        });
    }

    group.bench_function("rank_scored/2_terms", |b| {
        b.iter(|| rank_scored(black_box("power bi"), black_box(&catalog), DEFAULT_LIMIT));
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in CATALOG_SIZES {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size.records as u64));

        group.bench_with_input(
            BenchmarkId::new("catalog_size", size.name),
            &catalog,
            |b, catalog| {
                b.iter(|| rank(black_box("data analytics"), black_box(catalog), DEFAULT_LIMIT));
            },
        );

        // No limit: sorting every match dominates
        group.bench_with_input(
            BenchmarkId::new("unlimited", size.name),
            &catalog,
            |b, catalog| {
                b.iter(|| rank(black_box("a"), black_box(catalog), usize::MAX));
            },
        );
    }

    group.finish();
}

/// A user typing "dashboard" one character at a time, each keystroke debounced
/// and only the last one ranked.
fn bench_session_typing(c: &mut Criterion) {
    c.bench_function("session/type_dashboard", |b| {
        b.iter(|| {
            let mut session = SearchSession::new(Catalog::builtin(), SearchOptions::default());
            session.open();
            let word = "dashboard";
            for (i, end) in (1..=word.len()).enumerate() {
                session.input(&word[..end], Duration::from_millis(i as u64 * 60));
            }
            session.tick(Duration::from_secs(10));
            black_box(session.results().len())
        });
    });
}

// ============================================================================
// CRITERION CONFIGURATION
// ============================================================================

/// Tighter intervals than the defaults; these benches are all sub-millisecond.
fn tight_confidence() -> Criterion {
    Criterion::default()
        .confidence_level(0.99)
        .sample_size(200)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .significance_level(0.01)
        .noise_threshold(0.02)
}

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets = bench_builtin, bench_scaling, bench_session_typing
);

criterion_main!(benches);
