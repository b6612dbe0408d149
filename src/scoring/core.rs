// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Four independent signals, summed. Each is a plain substring check against the
//! lowercased query, so the whole thing is a handful of `contains` calls per record.
//!
//! | Signal       | Points | Fires                                            |
//! |--------------|--------|--------------------------------------------------|
//! | Title        | 100    | once, if the title contains the query            |
//! | Description  | 50     | once, if the description contains the query      |
//! | Tag          | 30     | once per tag that contains the query             |
//! | Word overlap | 20     | once per (query word, title word) containment    |
//!
//! # Key Invariant: Title Dominance
//!
//! A query equal to a title earns that record 100 for the title hit plus 20 for
//! every title word overlapping itself. A record matching only on tags needs
//! four matching tags to reach 120, so with the handful of tags real catalogs
//! carry the exact-title record stays on top. The weights are not normalized
//! against pathological catalogs (dozens of tags all containing the query).
//!
//! # Word overlap over-counts
//!
//! The overlap check is symmetric containment per word pair. Short query words
//! ("a", "bi") hit many title words. This skews scores for one- and two-letter
//! tokens; the weighting is kept as is.

use crate::types::{Record, ScoreBreakdown};
use crate::utils::{normalize, words};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Points for a title containing the query.
pub const TITLE_SCORE: u32 = 100;

/// Points for a description containing the query.
pub const DESCRIPTION_SCORE: u32 = 50;

/// Points per tag containing the query.
pub const TAG_SCORE: u32 = 30;

/// Points per (query word, title word) pair where one contains the other.
pub const WORD_OVERLAP_SCORE: u32 = 20;

impl ScoreBreakdown {
    /// Sum of all signals, in points.
    pub fn total(&self) -> u32 {
        let mut score = 0;
        if self.title_hit {
            score += TITLE_SCORE;
        }
        if self.description_hit {
            score += DESCRIPTION_SCORE;
        }
        score += self.tag_hits * TAG_SCORE;
        score += self.word_overlaps * WORD_OVERLAP_SCORE;
        score
    }

    /// Did anything fire?
    pub fn is_match(&self) -> bool {
        self.title_hit || self.description_hit || self.tag_hits > 0 || self.word_overlaps > 0
    }
}

/// Symmetric containment: either word is a substring of the other.
///
/// This is the typo-tolerance signal. "dash" matches "dashboards", and
/// "dashboards" matches "dash".
#[inline]
pub fn words_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Score one record against an already-lowercased query.
///
/// `query` must be the output of [`normalize`]. It is not trimmed: a trailing
/// space is part of the substring the title/description/tag checks look for,
/// while the word-overlap check ignores it because it splits on whitespace.
pub fn score_record(record: &Record, query: &str) -> ScoreBreakdown {
    let title = normalize(&record.title);

    let title_hit = title.contains(query);
    let description_hit = normalize(&record.description).contains(query);

    let tag_hits = record
        .tags
        .iter()
        .filter(|tag| normalize(tag).contains(query))
        .count() as u32;

    let mut word_overlaps = 0;
    for query_word in words(query) {
        for title_word in words(&title) {
            if words_overlap(query_word, title_word) {
                word_overlaps += 1;
            }
        }
    }

    ScoreBreakdown {
        title_hit,
        description_hit,
        tag_hits,
        word_overlaps,
    }
}
