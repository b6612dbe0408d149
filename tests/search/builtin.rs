//! Queries a visitor would actually type, against the built-in catalog.

use super::common::{assert_results_from_catalog, ids};
use folio::{rank, rank_scored, Catalog, DEFAULT_LIMIT};

#[test]
fn resume_page_comes_first() {
    let catalog = Catalog::builtin();
    let results = rank("resume", &catalog, DEFAULT_LIMIT);
    assert_eq!(results[0].id, "resume");
    assert_results_from_catalog(&results, &catalog);
}

#[test]
fn power_bi_skill_comes_first() {
    let catalog = Catalog::builtin();
    let results = rank("Power BI", &catalog, DEFAULT_LIMIT);
    assert_eq!(results[0].id, "powerbi-skill");
    // Everything that mentions Power BI anywhere shows up
    for id in ["projects", "sales-dashboard", "bi-dashboards"] {
        assert!(ids(&results).iter().any(|r| r == id), "missing {}", id);
    }
}

#[test]
fn python_skill_outranks_pages_mentioning_python() {
    let catalog = Catalog::builtin();
    let scored = rank_scored("python", &catalog, DEFAULT_LIMIT);
    assert_eq!(scored[0].record.id, "python-skill");
    assert!(scored[0].breakdown.title_hit);
    assert!(scored.iter().skip(1).all(|s| !s.breakdown.title_hit));
}

#[test]
fn default_limit_caps_broad_queries() {
    let catalog = Catalog::builtin();
    let everything = rank("a", &catalog, usize::MAX);
    assert!(everything.len() > DEFAULT_LIMIT);
    assert_eq!(rank("a", &catalog, DEFAULT_LIMIT).len(), DEFAULT_LIMIT);
}

#[test]
fn shared_url_records_are_distinct_results() {
    // The three skills all point at /about#skills
    let catalog = Catalog::builtin();
    let results = rank("advanced", &catalog, DEFAULT_LIMIT);
    let skill_hits = results.iter().filter(|r| r.url == "/about#skills").count();
    assert_eq!(skill_hits, 2);
}
