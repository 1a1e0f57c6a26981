//! Build domain model.
//!
//! # Responsibility
//! - Define the write shape ([`BuildDraft`]) and read shape ([`Build`]) for
//!   schematic builds.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another build.
//! - `author`/`theme` always name existing catalog rows once persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every persisted build.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BuildId = Uuid;

/// Write model for creating one build.
///
/// Catalog references are carried by name; missing rows are created on first
/// reference during persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildDraft {
    pub name: String,
    pub author: String,
    pub theme: String,
    #[serde(default)]
    pub description: String,
    /// Color tags; duplicates collapse to one relation row.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Screenshot paths in display order.
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub schematic_path: Option<String>,
}

impl BuildDraft {
    /// Creates a draft with the required fields and empty optional ones.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            theme: theme.into(),
            description: String::new(),
            colors: Vec::new(),
            screenshots: Vec::new(),
            schematic_path: None,
        }
    }
}

/// Read model for one persisted build with catalog names resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub uuid: BuildId,
    pub name: String,
    pub author: String,
    pub theme: String,
    pub description: String,
    /// Color names sorted case-insensitively.
    pub colors: Vec<String>,
    /// Screenshot paths in stored display order.
    pub screenshots: Vec<String>,
    pub schematic_path: Option<String>,
    /// Update timestamp in epoch milliseconds.
    pub updated_at: i64,
}
