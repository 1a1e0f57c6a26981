//! Core domain logic for Buildshelf, a catalog of Minecraft build
//! schematics.
//! This crate is the single source of truth for catalog invariants.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use auth::role::{parse_role, supported_role_strings, Role, RoleParseError};
pub use auth::session::{require_role, AuthError, SessionProvider};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::build::{Build, BuildDraft, BuildId};
pub use model::catalog::{CatalogEntry, CatalogId, CatalogKind};
pub use model::name::{
    validate_candidates, validate_name, NameIssue, NameValidationError, BULK_LIST_MAX,
    NAME_MIN_CHARS,
};
pub use repo::build_repo::{BuildFilter, BuildRepository, SqliteBuildRepository};
pub use repo::catalog_repo::{CatalogRepository, RepoError, RepoResult, SqliteCatalogRepository};
pub use service::build_service::{BuildService, BuildServiceError};
pub use service::bulk_service::{
    BulkCreateError, BulkCreateReport, BulkCreateRequest, CatalogService, NameEntry,
};
pub use stats::visits::{process_visits, VisitCounter};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
