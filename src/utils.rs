//! Utility functions for string processing.

/// Lowercase a string for matching.
///
/// ASCII-only on purpose: no locale rules, no diacritic stripping, no Unicode
/// case folding. "Café" becomes "café", not "cafe". Non-ASCII bytes pass through
/// untouched, so matching on them is exact.
pub fn normalize(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// True when the query has nothing but whitespace in it.
///
/// The ranker returns nothing for these, and the session reports them as idle
/// rather than "no matches".
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Split already-normalized text into words on whitespace runs.
///
/// Runs of whitespace never produce empty words.
pub fn words(value: &str) -> impl Iterator<Item = &str> {
    value.split_whitespace()
}
