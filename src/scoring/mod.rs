// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! `core` turns one record and one query into a score. `ranking` runs that over
//! the whole catalog, drops the misses, and sorts what's left.

mod core;
pub mod ranking;

pub use core::*;
