//! Keyword search over a small, static catalog of site records.
//!
//! Built for the search overlay of a portfolio site: a few dozen pages, projects,
//! services and skills, ranked on every (debounced) keystroke. No index, no
//! persistence. At this size a linear scan with a handful of substring checks per
//! record is faster than building anything smarter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  catalog/    │────▶│  scoring/    │
//! │  (Record,   │     │ (validation, │     │ (score, rank)│
//! │  Category)  │     │   builtin)   │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                     ┌──────────────┐            ▼
//!                     │ debounce.rs  │────▶┌──────────────┐
//!                     │ (single-slot │     │  session.rs  │──▶ wasm.rs / CLI
//!                     │    timer)    │     │ (keys, state)│
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{rank, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let results = rank("power bi", &catalog, 8);
//! assert_eq!(results[0].id, "powerbi-skill");
//! ```

// Module declarations
pub mod catalog;
pub mod debounce;
pub mod options;
mod scoring;
pub mod session;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::{Catalog, CatalogError};
pub use debounce::Debouncer;
pub use options::{SearchOptions, DEFAULT_DEBOUNCE_MS};
pub use scoring::ranking::{compare_results, rank, rank_scored, DEFAULT_LIMIT};
pub use scoring::{
    score_record, words_overlap, DESCRIPTION_SCORE, TAG_SCORE, TITLE_SCORE, WORD_OVERLAP_SCORE,
};
pub use session::{Key, Navigation, SearchSession, SearchStatus, UnknownKey};
pub use types::{Category, Record, ScoreBreakdown, ScoredRecord};
pub use utils::{is_blank, normalize};
