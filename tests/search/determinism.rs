//! Same input, same output. Ranking holds no state between calls.

use folio::{rank, rank_scored, Catalog, DEFAULT_LIMIT};

const QUERIES: &[&str] = &[
    "python",
    "power bi",
    "data",
    "a",
    "machine learning",
    "dash",
    "resume",
    "consulting",
];

#[test]
fn repeated_calls_return_identical_results() {
    let catalog = Catalog::builtin();
    for query in QUERIES {
        let first = rank(query, &catalog, DEFAULT_LIMIT);
        for _ in 0..5 {
            assert_eq!(rank(query, &catalog, DEFAULT_LIMIT), first, "query {:?}", query);
        }
    }
}

#[test]
fn interleaved_queries_do_not_affect_each_other() {
    let catalog = Catalog::builtin();
    let baseline: Vec<_> = QUERIES
        .iter()
        .map(|q| rank_scored(q, &catalog, DEFAULT_LIMIT))
        .collect();

    for (query, expected) in QUERIES.iter().rev().zip(baseline.iter().rev()) {
        assert_eq!(&rank_scored(query, &catalog, DEFAULT_LIMIT), expected);
    }
}

#[test]
fn ranking_does_not_mutate_catalog() {
    let catalog = Catalog::builtin();
    let before = catalog.clone();
    for query in QUERIES {
        let _ = rank(query, &catalog, DEFAULT_LIMIT);
    }
    assert_eq!(catalog, before);
}
