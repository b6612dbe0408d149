// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matching records get sorted.
//!
//! Score descending, then catalog order: whoever wrote the catalog decides which
//! of two equally-scored records comes first. A stable sort on score alone gives
//! exactly that, so there is no explicit tiebreaker.

use crate::catalog::Catalog;
use crate::types::{Record, ScoredRecord};
use crate::utils::{is_blank, normalize};
use std::cmp::Ordering;

use super::core::score_record;

/// Maximum number of results when the caller doesn't say otherwise.
pub const DEFAULT_LIMIT: usize = 8;

/// Compare two scored records for ranking: higher score first.
///
/// Equal scores compare `Equal`, which is what lets a stable sort keep catalog order.
pub fn compare_results(a: &ScoredRecord<'_>, b: &ScoredRecord<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Rank the catalog against a query, keeping scores and signal breakdowns.
///
/// Same order as [`rank`]. Used by the CLI's `--explain` and by tests that
/// want to see why something ranked where it did.
pub fn rank_scored<'a>(query: &str, catalog: &'a Catalog, limit: usize) -> Vec<ScoredRecord<'a>> {
    if is_blank(query) {
        return Vec::new();
    }

    let query = normalize(query);

    let mut results: Vec<ScoredRecord<'a>> = catalog
        .iter()
        .filter_map(|record| {
            let breakdown = score_record(record, &query);
            breakdown.is_match().then(|| ScoredRecord {
                record,
                score: breakdown.total(),
                breakdown,
            })
        })
        .collect();

    // `sort_by` is stable: ties keep catalog order
    results.sort_by(compare_results);
    results.truncate(limit);

    tracing::trace!(
        query = %query,
        matched = results.len(),
        limit,
        "ranked catalog"
    );

    results
}

/// Rank the catalog against a query and return the top `limit` records.
///
/// Blank queries return nothing. Records that fire no signal are dropped.
/// Pure: no I/O, no mutation, same input gives the same output.
///
/// # Example
///
/// ```
/// use folio::{rank, Catalog, DEFAULT_LIMIT};
///
/// let catalog = Catalog::builtin();
/// let results = rank("resume", &catalog, DEFAULT_LIMIT);
/// assert_eq!(results[0].id, "resume");
/// ```
pub fn rank<'a>(query: &str, catalog: &'a Catalog, limit: usize) -> Vec<&'a Record> {
    rank_scored(query, catalog, limit)
        .into_iter()
        .map(|scored| scored.record)
        .collect()
}
