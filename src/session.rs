// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session: the state a search overlay keeps between keystrokes.
//!
//! The ranker is stateless. Everything stateful lives here: whether the overlay
//! is open, what's been typed, the last result list, which result is highlighted,
//! and the debounce timer that decides when typing turns into a ranking.
//!
//! # Keyboard model
//!
//! | Key      | Effect                                                       |
//! |----------|--------------------------------------------------------------|
//! | `Open`   | open the overlay (Cmd/Ctrl+K)                                |
//! | `Escape` | close, clear query and results, cancel pending search        |
//! | `Down`   | highlight next result, wrapping; none → first                |
//! | `Up`     | highlight previous result, wrapping; none or first → last    |
//! | `Enter`  | emit a [`Navigation`] for the highlighted result and close   |
//!
//! `Down`/`Up`/`Enter` do nothing while closed or with no results.
//!
//! # Invariants
//!
//! - `selected`, when set, is a valid index into `results`.
//! - Every refresh of `results` clears `selected`.

use crate::catalog::Catalog;
use crate::debounce::Debouncer;
use crate::options::SearchOptions;
use crate::scoring::ranking::rank;
use crate::types::Record;
use crate::utils::is_blank;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A key the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Open,
    Escape,
    Down,
    Up,
    Enter,
}

/// Unrecognized key name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Accepts DOM `KeyboardEvent.key` names and short aliases.
    ///
    /// A bare `k` is not `Open`: the shortcut needs Cmd/Ctrl, so hosts pass
    /// `mod+k` (or `open`) once they've checked the modifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" | "mod+k" => Ok(Key::Open),
            "escape" | "esc" => Ok(Key::Escape),
            "arrowdown" | "down" => Ok(Key::Down),
            "arrowup" | "up" => Ok(Key::Up),
            "enter" | "return" => Ok(Key::Enter),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

/// Where the user asked to go. Acting on it is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Navigation {
    pub id: String,
    pub url: String,
}

/// What the overlay should show below the input.
///
/// The ranker returns an empty list both for "nothing typed" and for "typed,
/// nothing matched". Only the session knows which one it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing but whitespace typed.
    Idle,
    /// A query was ranked and matched nothing.
    NoMatches,
    /// This many results are showing.
    Results(usize),
}

impl SearchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchStatus::Idle => "idle",
            SearchStatus::NoMatches => "no-matches",
            SearchStatus::Results(_) => "results",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStatus::Results(n) => write!(f, "{} result{}", n, if *n == 1 { "" } else { "s" }),
            other => f.write_str(other.as_str()),
        }
    }
}

pub struct SearchSession {
    catalog: Catalog,
    options: SearchOptions,
    debouncer: Debouncer<String>,
    open: bool,
    query: String,
    results: Vec<Record>,
    selected: Option<usize>,
}

impl SearchSession {
    pub fn new(catalog: Catalog, options: SearchOptions) -> Self {
        Self {
            debouncer: Debouncer::new(options.debounce()),
            catalog,
            options,
            open: false,
            query: String::new(),
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Record] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// Is a typed query still waiting out its debounce?
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the overlay. Query and results survive for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Record a keystroke's worth of input and restart the debounce timer.
    pub fn input(&mut self, query: &str, now: Duration) {
        self.query = query.to_string();
        self.debouncer.schedule(self.query.clone(), now);
    }

    /// Run the debounced search if it's due. Returns true if results were refreshed.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.refresh(&query);
                true
            }
            None => false,
        }
    }

    /// Skip the debounce: set the query and rank it right away.
    pub fn search_now(&mut self, query: &str) {
        self.debouncer.cancel();
        self.query = query.to_string();
        let query = self.query.clone();
        self.refresh(&query);
    }

    fn refresh(&mut self, query: &str) {
        self.results = rank(query, &self.catalog, self.options.limit)
            .into_iter()
            .cloned()
            .collect();
        self.selected = None;
        tracing::debug!(query, results = self.results.len(), "session results refreshed");
    }

    pub fn status(&self) -> SearchStatus {
        if is_blank(&self.query) {
            SearchStatus::Idle
        } else if self.results.is_empty() {
            SearchStatus::NoMatches
        } else {
            SearchStatus::Results(self.results.len())
        }
    }

    /// React to a key. Returns a navigation when `Enter` selects a result.
    pub fn handle_key(&mut self, key: Key) -> Option<Navigation> {
        match key {
            Key::Open => {
                self.open();
                None
            }
            Key::Escape => {
                self.open = false;
                self.debouncer.cancel();
                self.query.clear();
                self.results.clear();
                self.selected = None;
                None
            }
            _ if !self.open || self.results.is_empty() => None,
            Key::Down => {
                let len = self.results.len();
                self.selected = Some(match self.selected {
                    Some(i) => (i + 1) % len,
                    None => 0,
                });
                None
            }
            Key::Up => {
                let len = self.results.len();
                self.selected = Some(match self.selected {
                    None | Some(0) => len - 1,
                    Some(i) => i - 1,
                });
                None
            }
            Key::Enter => {
                let record = self.selected_record()?;
                let navigation = Navigation {
                    id: record.id.clone(),
                    url: record.url.clone(),
                };
                self.open = false;
                Some(navigation)
            }
        }
    }
}
