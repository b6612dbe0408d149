//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use folio::{Catalog, Record};

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_catalog, make_record, make_record_with_description};

/// The two-record catalog from the resume scenario: title match vs tag match.
pub fn resume_catalog() -> Catalog {
    make_catalog(vec![
        make_record("resume", "Resume", &["resume", "cv"]),
        make_record("about", "About Me", &["about", "resume"]),
    ])
}

/// Ids of a ranked result list, in order.
pub fn ids(results: &[&Record]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

/// Assert every returned record is present in the catalog (by identity of fields).
pub fn assert_results_from_catalog(results: &[&Record], catalog: &Catalog) {
    for record in results {
        let found = catalog.get(&record.id);
        assert_eq!(
            found,
            Some(*record),
            "result '{}' is not a catalog record",
            record.id
        );
    }
}
