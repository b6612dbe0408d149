// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog loading.
//!
//! Whatever bytes land in a catalog file, loading either fails with an error
//! or yields a catalog that upholds its invariants.

#![no_main]

use folio::{rank, Catalog};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let json = String::from_utf8_lossy(data);

    let Ok(catalog) = Catalog::from_json(&json) else {
        return;
    };

    // INVARIANT 1: Ids unique, required fields non-blank
    let mut ids = HashSet::new();
    for record in &catalog {
        assert!(ids.insert(record.id.as_str()), "duplicate id {}", record.id);
        assert!(!record.id.trim().is_empty());
        assert!(!record.title.trim().is_empty());
        assert!(!record.url.trim().is_empty());
    }

    // INVARIANT 2: Any accepted catalog can be ranked against its own titles
    for record in &catalog {
        let results = rank(&record.title, &catalog, 8);
        assert!(results.iter().any(|r| r.id == record.id) || results.len() == 8);
    }
});
