// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! A `Record` is one searchable thing on the site: a page, a project, a service
//! offering, or a skill. Records are loaded once and never change, so every type
//! here is plain data. The ranker borrows records; it never clones or mutates them.
//!
//! # Invariants
//!
//! - **Record**: `id`, `title` and `url` are non-empty. Enforced by `Catalog::new`,
//!   not by the struct itself, so deserializing a single record is always cheap.
//! - **ScoredRecord**: `score > 0`. Zero-score records never leave the ranker.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CATEGORY
// =============================================================================

/// What kind of thing a record points at.
///
/// Closed set. The JSON form is the lowercase name (`"page"`, `"project"`, ...);
/// anything else fails deserialization, which is how a typo in a catalog file
/// gets caught at load time instead of rendering a blank badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Project,
    Service,
    Skill,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Page,
        Category::Project,
        Category::Service,
        Category::Skill,
    ];

    /// The lowercase name used in JSON and on result badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Project => "project",
            Category::Service => "service",
            Category::Skill => "skill",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One searchable entry in the catalog.
///
/// `url` is opaque to the ranker. It only matters to whoever handles selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub url: String,
    /// Short keywords. Order is irrelevant to scoring.
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// SCORING OUTPUT
// =============================================================================

/// How each signal contributed to a record's score.
///
/// Counts, not points: `tag_hits = 2` means two tags matched. Multiply by the
/// constants in `scoring` to get points, or just call `total()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub title_hit: bool,
    pub description_hit: bool,
    pub tag_hits: u32,
    pub word_overlaps: u32,
}

/// A record that matched, with the score that put it where it is.
///
/// Exists to sort and to explain rankings. The public `rank` output drops the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecord<'a> {
    pub record: &'a Record,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}
