//! Catalog entity model.
//!
//! # Responsibility
//! - Define the three catalog kinds (author, theme, color) and their shared
//!   row shape.
//!
//! # Invariants
//! - A name is unique within its kind; the same name may exist in several
//!   kinds at once.
//! - Catalog rows are created on first reference and never implicitly
//!   deleted.

use serde::{Deserialize, Serialize};

/// Row identifier for catalog reference tables.
pub type CatalogId = i64;

/// The three independent catalog kinds attached to builds by relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Author,
    Theme,
    Color,
}

impl CatalogKind {
    /// All kinds in reconciliation order.
    pub const ALL: [CatalogKind; 3] = [Self::Author, Self::Theme, Self::Color];

    /// Stable string id used in log events and field-level messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Theme => "theme",
            Self::Color => "color",
        }
    }

    /// Request field name carrying candidates of this kind.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Author => "authors",
            Self::Theme => "themes",
            Self::Color => "colors",
        }
    }
}

/// One persisted catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: CatalogId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::CatalogKind;

    #[test]
    fn kind_string_ids_are_stable() {
        assert_eq!(CatalogKind::Author.as_str(), "author");
        assert_eq!(CatalogKind::Theme.as_str(), "theme");
        assert_eq!(CatalogKind::Color.as_str(), "color");
    }

    #[test]
    fn field_names_match_request_shape() {
        assert_eq!(CatalogKind::Author.field_name(), "authors");
        assert_eq!(CatalogKind::Theme.field_name(), "themes");
        assert_eq!(CatalogKind::Color.field_name(), "colors");
    }
}
