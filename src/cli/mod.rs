// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands: `search` to rank a query, `inspect` to summarize a catalog,
//! `validate` to check a catalog file, and `repl` to drive a search session line
//! by line. Every command that reads a catalog falls back to `FOLIO_CATALOG` and
//! then to the built-in catalog.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Keyword search over a static portfolio catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a query and print the results
    Search {
        /// Search query
        query: String,

        /// JSON catalog file (defaults to the built-in catalog)
        #[arg(short, long, env = "FOLIO_CATALOG")]
        catalog: Option<PathBuf>,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = folio::DEFAULT_LIMIT)]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show the score and which signals fired for each result
        #[arg(long)]
        explain: bool,
    },

    /// Summarize a catalog: counts per category and every record
    Inspect {
        /// JSON catalog file (defaults to the built-in catalog)
        #[arg(short, long, env = "FOLIO_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Load and validate a JSON catalog file
    Validate {
        /// Path to catalog file
        file: PathBuf,
    },

    /// Interactive session: type queries, drive the overlay with :down/:up/:enter/:esc
    Repl {
        /// JSON catalog file (defaults to the built-in catalog)
        #[arg(short, long, env = "FOLIO_CATALOG")]
        catalog: Option<PathBuf>,

        /// Maximum number of results to show
        #[arg(short, long, default_value_t = folio::DEFAULT_LIMIT)]
        limit: usize,
    },
}
