//! Bulk create-or-skip reconciliation service.
//!
//! # Responsibility
//! - Partition requested catalog names into created (new) and skipped
//!   (already existing) subsets, per kind, and persist the new ones.
//! - Validate the whole request before any persistence.
//!
//! # Invariants
//! - Validation is all-or-nothing: one bad candidate rejects the request
//!   with nothing persisted.
//! - Candidates are deduplicated within the request by exact string, first
//!   occurrence wins.
//! - Output lists preserve first-occurrence input order.
//! - `created` and `skipped` are disjoint and together cover every
//!   deduplicated candidate exactly once.

use crate::auth::role::Role;
use crate::auth::session::{require_role, AuthError, SessionProvider};
use crate::model::catalog::{CatalogEntry, CatalogKind};
use crate::model::name::{validate_candidates, NameIssue, BULK_LIST_MAX};
use crate::repo::catalog_repo::{CatalogRepository, RepoError, RepoResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One requested catalog name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
}

impl NameEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Bulk-create request: three independent candidate lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkCreateRequest {
    #[serde(default)]
    pub authors: Vec<NameEntry>,
    #[serde(default)]
    pub themes: Vec<NameEntry>,
    #[serde(default)]
    pub colors: Vec<NameEntry>,
}

impl BulkCreateRequest {
    fn entries(&self, kind: CatalogKind) -> &[NameEntry] {
        match kind {
            CatalogKind::Author => &self.authors,
            CatalogKind::Theme => &self.themes,
            CatalogKind::Color => &self.colors,
        }
    }
}

/// Reconciliation report: created/skipped names per kind, reporting only.
///
/// No entity identifiers are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateReport {
    pub created_authors: Vec<String>,
    pub skipped_authors: Vec<String>,
    pub created_themes: Vec<String>,
    pub skipped_themes: Vec<String>,
    pub created_colors: Vec<String>,
    pub skipped_colors: Vec<String>,
}

impl BulkCreateReport {
    fn set(&mut self, kind: CatalogKind, outcome: KindOutcome) {
        match kind {
            CatalogKind::Author => {
                self.created_authors = outcome.created;
                self.skipped_authors = outcome.skipped;
            }
            CatalogKind::Theme => {
                self.created_themes = outcome.created;
                self.skipped_themes = outcome.skipped;
            }
            CatalogKind::Color => {
                self.created_colors = outcome.created;
                self.skipped_colors = outcome.skipped;
            }
        }
    }

    fn created_total(&self) -> usize {
        self.created_authors.len() + self.created_themes.len() + self.created_colors.len()
    }

    fn skipped_total(&self) -> usize {
        self.skipped_authors.len() + self.skipped_themes.len() + self.skipped_colors.len()
    }
}

struct KindOutcome {
    created: Vec<String>,
    skipped: Vec<String>,
}

/// Bulk-create failure.
#[derive(Debug)]
pub enum BulkCreateError {
    /// Caller session is not allowed to mutate the catalog.
    Auth(AuthError),
    /// One candidate list exceeds [`BULK_LIST_MAX`].
    OversizedList {
        kind: CatalogKind,
        len: usize,
        max: usize,
    },
    /// Field-addressed candidate validation failures, whole request rejected.
    InvalidNames(Vec<NameIssue>),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BulkCreateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::OversizedList { kind, len, max } => write!(
                f,
                "{} list has {len} entries, maximum is {max}",
                kind.field_name()
            ),
            Self::InvalidNames(issues) => {
                write!(f, "invalid names in request:")?;
                for issue in issues {
                    write!(f, " [{issue}]")?;
                }
                Ok(())
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BulkCreateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AuthError> for BulkCreateError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<RepoError> for BulkCreateError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Catalog service facade over repository implementations.
pub struct CatalogService<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates the absent subset of the requested names and reports both
    /// subsets per kind.
    ///
    /// # Contract
    /// - Requires an authenticated user with [`Role::Editor`].
    /// - Validates every candidate before persisting anything.
    /// - Existence checks are exact, case-sensitive name lookups.
    pub fn bulk_create(
        &self,
        session: &dyn SessionProvider,
        request: &BulkCreateRequest,
    ) -> Result<BulkCreateReport, BulkCreateError> {
        require_role(session, Role::Editor)?;
        validate_request(request)?;

        let mut report = BulkCreateReport::default();
        for kind in CatalogKind::ALL {
            let outcome = self.reconcile_kind(kind, request.entries(kind))?;
            report.set(kind, outcome);
        }

        info!(
            "event=bulk_create module=service status=ok created={} skipped={}",
            report.created_total(),
            report.skipped_total()
        );
        Ok(report)
    }

    /// Lists all rows of one kind.
    pub fn list(&self, kind: CatalogKind) -> RepoResult<Vec<CatalogEntry>> {
        self.repo.list(kind)
    }

    fn reconcile_kind(&self, kind: CatalogKind, entries: &[NameEntry]) -> RepoResult<KindOutcome> {
        let mut created = Vec::new();
        let mut skipped = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for entry in entries {
            if !seen.insert(entry.name.as_str()) {
                continue;
            }

            if self.repo.find_by_name(kind, &entry.name)?.is_some() {
                skipped.push(entry.name.clone());
            } else {
                self.repo.insert_name(kind, &entry.name)?;
                created.push(entry.name.clone());
            }
        }

        Ok(KindOutcome { created, skipped })
    }
}

fn validate_request(request: &BulkCreateRequest) -> Result<(), BulkCreateError> {
    let mut issues = Vec::new();
    for kind in CatalogKind::ALL {
        let entries = request.entries(kind);
        if entries.len() > BULK_LIST_MAX {
            return Err(BulkCreateError::OversizedList {
                kind,
                len: entries.len(),
                max: BULK_LIST_MAX,
            });
        }

        issues.extend(validate_candidates(
            kind.field_name(),
            entries.iter().map(|entry| entry.name.as_str()),
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(BulkCreateError::InvalidNames(issues))
    }
}
