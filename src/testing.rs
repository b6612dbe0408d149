//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{Category, Record};

/// Create a test record with a title and tags.
///
/// Description is empty so it never fires; url is derived from the id.
pub fn make_record(id: &str, title: &str, tags: &[&str]) -> Record {
    Record {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: Category::Page,
        url: format!("/{}", id),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Create a test record with a description as well.
pub fn make_record_with_description(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
) -> Record {
    Record {
        description: description.to_string(),
        ..make_record(id, title, tags)
    }
}

/// Build a catalog, panicking on invalid input. Tests only.
pub fn make_catalog(records: Vec<Record>) -> Catalog {
    Catalog::new(records).expect("test catalog should be valid")
}
