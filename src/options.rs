//! Search options: the two knobs a caller can turn.
//!
//! Deserializes from a partial JSON object, so `{}` and `{"limit": 3}` are both
//! valid. The WASM bindings accept the same shape from JavaScript.

use crate::scoring::ranking::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default quiet period before a typed query is ranked.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 8)
    pub limit: usize,
    /// Quiet period after the last keystroke, in milliseconds (default: 200)
    pub debounce_ms: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
