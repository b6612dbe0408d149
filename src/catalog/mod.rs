// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: every record the search can return, validated once.
//!
//! Validation happens at construction and nowhere else. Once you hold a
//! `Catalog`, ids are unique and the required fields are non-empty, so the
//! ranker never has to check anything at query time.
//!
//! Catalogs come from three places:
//! - [`Catalog::builtin`]: the site's own pages, projects, services and skills
//! - [`Catalog::from_json`] / [`Catalog::from_path`]: a JSON array of records
//! - [`Catalog::new`]: records you built in code

mod builtin;

use crate::types::{Category, Record};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Why a catalog was rejected.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two records share an id.
    #[error("duplicate record id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// A required field is empty or whitespace.
    #[error("record at position {position} has an empty '{field}'")]
    EmptyField {
        position: usize,
        field: &'static str,
    },

    /// The JSON didn't parse as an array of records.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file couldn't be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A fixed, validated list of records.
///
/// Order matters: it's the tiebreaker when two records score the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Validate records and wrap them.
    ///
    /// An empty list is a valid (if useless) catalog.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        validate(&records)?;
        tracing::debug!(records = records.len(), "catalog validated");
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "loading catalog");
        Self::from_json(&raw)
    }

    /// The site's built-in catalog.
    pub fn builtin() -> Self {
        Self {
            records: builtin::records(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Record count per category, in [`Category::ALL`] order. Zero counts included.
    pub fn count_by_category(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .records
                    .iter()
                    .filter(|record| record.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn validate(records: &[Record]) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        for (field, value) in [
            ("id", &record.id),
            ("title", &record.title),
            ("url", &record.url),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField { position, field });
            }
        }

        if !seen.insert(record.id.as_str()) {
            let first = records
                .iter()
                .position(|other| other.id == record.id)
                .unwrap_or(position);
            return Err(CatalogError::DuplicateId {
                id: record.id.clone(),
                first,
                second: position,
            });
        }
    }

    Ok(())
}
