//! Inputs at the edges: blank queries, empty catalogs, odd characters, limits.

use super::common::{make_catalog, make_record, resume_catalog};
use folio::{rank, rank_scored, Catalog, DEFAULT_LIMIT};

#[test]
fn empty_query_returns_nothing() {
    assert!(rank("", &Catalog::builtin(), DEFAULT_LIMIT).is_empty());
}

#[test]
fn whitespace_only_queries_return_nothing() {
    let catalog = Catalog::builtin();
    for query in [" ", "   ", "\t", "\n", " \t\r\n "] {
        assert!(
            rank(query, &catalog, DEFAULT_LIMIT).is_empty(),
            "query {:?} should return nothing",
            query
        );
    }
}

#[test]
fn no_match_returns_nothing() {
    assert!(rank("xyznomatch", &Catalog::builtin(), DEFAULT_LIMIT).is_empty());
    assert!(rank("xyznomatch", &resume_catalog(), DEFAULT_LIMIT).is_empty());
}

#[test]
fn punctuation_without_matches_returns_nothing() {
    assert!(rank("?!", &Catalog::builtin(), DEFAULT_LIMIT).is_empty());
}

#[test]
fn punctuation_can_match_literally() {
    // "&" appears in several built-in titles
    let catalog = Catalog::builtin();
    let results = rank("&", &catalog, usize::MAX);
    assert!(results.iter().any(|r| r.id == "sql-skill"));
}

#[test]
fn empty_catalog_returns_nothing() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(rank("anything", &catalog, DEFAULT_LIMIT).is_empty());
}

#[test]
fn zero_limit_returns_nothing() {
    assert!(rank("resume", &resume_catalog(), 0).is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let catalog = resume_catalog();
    let lower = rank("resume", &catalog, DEFAULT_LIMIT);
    let upper = rank("RESUME", &catalog, DEFAULT_LIMIT);
    let mixed = rank("ReSuMe", &catalog, DEFAULT_LIMIT);
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn single_character_matches_broadly() {
    let catalog = Catalog::builtin();
    let results = rank("a", &catalog, usize::MAX);
    assert!(results.len() > catalog.len() / 2);
}

#[test]
fn surrounding_whitespace_changes_substring_signals() {
    // The query is lowercased but not trimmed: " resume" is not a substring of "resume"
    let catalog = make_catalog(vec![make_record("resume", "Resume", &["resume"])]);
    let padded = rank_scored(" resume", &catalog, DEFAULT_LIMIT);
    assert_eq!(padded.len(), 1);
    assert!(!padded[0].breakdown.title_hit);
    assert_eq!(padded[0].breakdown.tag_hits, 0);
    assert_eq!(padded[0].breakdown.word_overlaps, 1);
}

#[test]
fn no_diacritic_folding() {
    let catalog = make_catalog(vec![make_record("cafe", "Café Analytics", &[])]);
    assert!(rank("cafe analytics", &catalog, DEFAULT_LIMIT)
        .iter()
        .all(|r| r.id == "cafe"));
    let scored = rank_scored("cafe", &catalog, DEFAULT_LIMIT);
    assert!(scored.is_empty(), "'cafe' must not match 'café'");
}

#[test]
fn non_ascii_matches_exactly() {
    let catalog = make_catalog(vec![make_record("cafe", "Café Analytics", &[])]);
    let results = rank("café", &catalog, DEFAULT_LIMIT);
    assert_eq!(results.len(), 1);
}
