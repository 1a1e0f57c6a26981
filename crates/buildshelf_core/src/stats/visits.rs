//! Shared visit counter.
//!
//! # Responsibility
//! - Count catalog visits with one atomic increment per visit.
//!
//! # Invariants
//! - Each increment is observed exactly once.
//! - No ordering guarantee beyond per-increment atomicity.

use std::sync::atomic::{AtomicU64, Ordering};

static PROCESS_VISITS: VisitCounter = VisitCounter::new();

/// Monotonic visit counter shared across concurrent callers.
#[derive(Debug)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub const fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }

    /// Records one visit and returns the count including it.
    pub fn record(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Returns the total recorded so far.
    pub fn total(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

impl Default for VisitCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the process-wide visit counter.
pub fn process_visits() -> &'static VisitCounter {
    &PROCESS_VISITS
}
