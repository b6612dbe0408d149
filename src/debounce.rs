// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single-slot, restartable timer.
//!
//! Typing "python" fires six input events in a few hundred milliseconds. Only
//! the last one is worth ranking. The debouncer holds at most one pending value:
//! scheduling a new one throws the old one away and pushes the deadline out.
//!
//! There's no background thread and no runtime. The caller owns the clock and
//! passes `now` in, which keeps this usable from WASM (where the host hands us
//! `performance.now()`) and makes the tests deterministic. `now` is a `Duration`
//! since whatever epoch the caller likes, as long as it's consistent.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to fire at `now + delay`, replacing anything pending.
    ///
    /// The deadline saturates at `Duration::MAX`.
    ///
    /// Returns true if a pending value was replaced.
    pub fn schedule(&mut self, value: T, now: Duration) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now.saturating_add(self.delay),
        });
        replaced
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
