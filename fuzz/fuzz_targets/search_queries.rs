// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query ranking.
//!
//! Arbitrary queries and limits against the built-in catalog. Ranking must
//! never panic, never exceed the limit, and never return a record twice.

#![no_main]

use arbitrary::Arbitrary;
use folio::{rank_scored, Catalog};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    static CATALOG: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
    let catalog = CATALOG.get_or_init(Catalog::builtin);

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let limit = input.limit as usize;

    let results = rank_scored(&query, catalog, limit);

    // INVARIANT 1: Results bounded by limit
    assert!(results.len() <= limit);

    // INVARIANT 2: Blank queries return nothing
    if query.trim().is_empty() {
        assert!(results.is_empty(), "blank query {:?} matched", query);
    }

    // INVARIANT 3: Every result scored, sorted descending, ties in catalog order
    let position = |id: &str| catalog.iter().position(|r| r.id == id);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(position(&pair[0].record.id) < position(&pair[1].record.id));
        }
    }

    // INVARIANT 4: Scores are positive and agree with the breakdown
    for result in &results {
        assert!(result.score > 0);
        assert_eq!(result.score, result.breakdown.total());
        assert!(position(&result.record.id).is_some());
    }

    // INVARIANT 5: No duplicate records
    let mut seen = HashSet::new();
    for result in &results {
        assert!(seen.insert(&result.record.id), "duplicate {}", result.record.id);
    }
});
