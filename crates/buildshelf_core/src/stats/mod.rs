//! Lightweight runtime statistics.
//!
//! # Responsibility
//! - Track the catalog visit count across concurrent callers.

pub mod visits;
