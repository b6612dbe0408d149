//! WebAssembly bindings for the catalog search.
//!
//! Provides two WASM-accessible types:
//! - `FolioSearcher`: stateless ranking over a catalog
//! - `FolioSession`: the search overlay state (debounce, selection, keys)
//!
//! Timestamps are milliseconds from `performance.now()`; only differences matter.

use crate::catalog::Catalog;
use crate::options::SearchOptions;
use crate::scoring::ranking::rank;
use crate::session::{Key, SearchSession};
use crate::types::{Category, Record};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    category: Category,
    url: &'a str,
    tags: &'a [String],
}

impl<'a> From<&'a Record> for SearchResultOutput<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            description: &record.description,
            category: record.category,
            url: &record.url,
            tags: &record.tags,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn results_to_js(records: &[&Record]) -> Result<JsValue, JsValue> {
    let output: Vec<SearchResultOutput<'_>> = records.iter().map(|r| (*r).into()).collect();
    to_js(&output)
}

fn catalog_from_js(records: JsValue) -> Result<Catalog, JsValue> {
    let records: Vec<Record> = from_value(records).map_err(|e| e.to_string())?;
    Catalog::new(records).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn options_from_js(options: JsValue) -> Result<SearchOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(SearchOptions::default());
    }
    from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Negative and NaN timestamps read as zero, anything too large as `Duration::MAX`.
fn millis(now_ms: f64) -> Duration {
    if now_ms.is_nan() || now_ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(now_ms / 1000.0).unwrap_or(Duration::MAX)
}

/// WASM-accessible stateless searcher.
#[wasm_bindgen]
pub struct FolioSearcher {
    catalog: Catalog,
}

#[wasm_bindgen]
impl FolioSearcher {
    /// Create a searcher from an array of records.
    ///
    /// Fails if the records don't validate (duplicate ids, empty required fields).
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue) -> Result<FolioSearcher, JsValue> {
        Ok(FolioSearcher {
            catalog: catalog_from_js(records)?,
        })
    }

    /// Create a searcher over the site's built-in catalog.
    #[wasm_bindgen]
    pub fn builtin() -> FolioSearcher {
        FolioSearcher {
            catalog: Catalog::builtin(),
        }
    }

    /// Rank the catalog. `options` is optional (`{ limit }`).
    #[wasm_bindgen]
    pub fn search(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options = options_from_js(options)?;
        let results = rank(query, &self.catalog, options.limit);
        results_to_js(&results)
    }

    /// Get the total number of records.
    #[wasm_bindgen(js_name = recordCount)]
    pub fn record_count(&self) -> usize {
        self.catalog.len()
    }
}

/// WASM-accessible search overlay state.
#[wasm_bindgen]
pub struct FolioSession {
    inner: SearchSession,
}

#[wasm_bindgen]
impl FolioSession {
    /// Create a session over the given records (or the built-in catalog if
    /// `records` is null/undefined). `options` is `{ limit, debounceMs }`.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue, options: JsValue) -> Result<FolioSession, JsValue> {
        let catalog = if records.is_undefined() || records.is_null() {
            Catalog::builtin()
        } else {
            catalog_from_js(records)?
        };
        Ok(FolioSession {
            inner: SearchSession::new(catalog, options_from_js(options)?),
        })
    }

    /// Feed the input box value. Call `tick` later to let the debounce fire.
    #[wasm_bindgen]
    pub fn input(&mut self, query: &str, now_ms: f64) {
        self.inner.input(query, millis(now_ms));
    }

    /// Returns true if results changed and the list should re-render.
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.inner.tick(millis(now_ms))
    }

    /// Handle a `KeyboardEvent.key` name. Returns the URL to navigate to on
    /// `Enter`, otherwise undefined. Unknown keys are ignored.
    ///
    /// Plain `k` is ignored. For the Cmd/Ctrl+K shortcut the host checks
    /// `metaKey || ctrlKey` itself and passes `"mod+k"`.
    #[wasm_bindgen]
    pub fn key(&mut self, name: &str) -> Option<String> {
        let key: Key = name.parse().ok()?;
        self.inner.handle_key(key).map(|nav| nav.url)
    }

    #[wasm_bindgen]
    pub fn open(&mut self) {
        self.inner.open();
    }

    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.inner.close();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    #[wasm_bindgen(js_name = isPending)]
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let records: Vec<&Record> = self.inner.results().iter().collect();
        results_to_js(&records)
    }

    /// Highlighted result index, or -1 for none.
    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> i32 {
        self.inner.selected().map_or(-1, |i| i as i32)
    }

    /// `"idle"`, `"no-matches"` or `"results"`.
    #[wasm_bindgen]
    pub fn status(&self) -> String {
        self.inner.status().as_str().to_string()
    }
}
