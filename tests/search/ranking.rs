//! Ranking order: which signals win, and how ties break.

use super::common::{ids, make_catalog, make_record, make_record_with_description, resume_catalog};
use folio::{rank, rank_scored, DEFAULT_LIMIT, TAG_SCORE, TITLE_SCORE, WORD_OVERLAP_SCORE};

// ============================================================================
// SIGNAL ORDERING
// ============================================================================

#[test]
fn resume_title_match_ranks_above_tag_match() {
    let catalog = resume_catalog();
    let results = rank("resume", &catalog, DEFAULT_LIMIT);
    assert_eq!(ids(&results), vec!["resume", "about"]);

    let scored = rank_scored("resume", &catalog, DEFAULT_LIMIT);
    // Title (100) + tag (30) + overlap (20) vs tag (30) + overlap (20):
    // "me" in "About Me" is a substring of "resume"
    assert_eq!(scored[0].score, TITLE_SCORE + TAG_SCORE + WORD_OVERLAP_SCORE);
    assert_eq!(scored[1].score, TAG_SCORE + WORD_OVERLAP_SCORE);
    assert!(!scored[1].breakdown.title_hit);
    assert_eq!(scored[1].breakdown.word_overlaps, 1);
}

#[test]
fn description_match_ranks_between_title_and_tag() {
    let catalog = make_catalog(vec![
        make_record("tag", "Alpha", &["kpi"]),
        make_record_with_description("desc", "Beta", "Tracks every KPI", &[]),
        make_record("title", "KPI Board", &[]),
    ]);

    let results = rank("kpi", &catalog, DEFAULT_LIMIT);
    assert_eq!(ids(&results), vec!["title", "desc", "tag"]);
}

#[test]
fn multiple_tag_hits_accumulate() {
    let catalog = make_catalog(vec![
        make_record("one", "First", &["python"]),
        make_record("three", "Second", &["python", "python3", "cpython"]),
    ]);

    let scored = rank_scored("python", &catalog, DEFAULT_LIMIT);
    assert_eq!(scored[0].record.id, "three");
    assert_eq!(scored[0].score, 3 * TAG_SCORE);
    assert_eq!(scored[1].score, TAG_SCORE);
}

#[test]
fn tag_prefix_scores_one_tag_hit() {
    let catalog = make_catalog(vec![make_record("bi", "Reports", &["power bi", "excel"])]);
    let scored = rank_scored("pow", &catalog, DEFAULT_LIMIT);
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].breakdown.tag_hits, 1);
    assert_eq!(scored[0].score, TAG_SCORE);
}

#[test]
fn fuzzy_word_overlap_alone_can_match() {
    // "dashboard sales" isn't a substring of anything, but both words overlap title words
    let catalog = make_catalog(vec![make_record(
        "sales",
        "Sales Performance Dashboards",
        &[],
    )]);

    let scored = rank_scored("dashboard sales", &catalog, DEFAULT_LIMIT);
    assert_eq!(scored.len(), 1);
    assert!(!scored[0].breakdown.title_hit);
    assert_eq!(scored[0].breakdown.word_overlaps, 2);
    assert_eq!(scored[0].score, 2 * WORD_OVERLAP_SCORE);
}

#[test]
fn exact_title_beats_tag_and_overlap_matches() {
    let catalog = make_catalog(vec![
        make_record("tags", "Something Else", &["data strategy", "strategy"]),
        make_record("overlap", "Strategic Data Work", &[]),
        make_record("exact", "Data Strategy", &[]),
    ]);

    let results = rank("Data Strategy", &catalog, DEFAULT_LIMIT);
    assert_eq!(results[0].id, "exact");
}

// ============================================================================
// TIES
// ============================================================================

#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = make_catalog(vec![
        make_record("z", "Zeta", &["shared"]),
        make_record("m", "Mu", &["unrelated"]),
        make_record("a", "Alpha", &["shared"]),
        make_record("k", "Kappa", &["shared"]),
    ]);

    let results = rank("shared", &catalog, DEFAULT_LIMIT);
    assert_eq!(ids(&results), vec!["z", "a", "k"]);
}

#[test]
fn truncation_keeps_earliest_of_tied_records() {
    let catalog = make_catalog(
        (0..12)
            .map(|i| make_record(&format!("r{:02}", i), &format!("Item {}", i), &["tagged"]))
            .collect(),
    );

    let results = rank("tagged", &catalog, 3);
    assert_eq!(ids(&results), vec!["r00", "r01", "r02"]);
}
