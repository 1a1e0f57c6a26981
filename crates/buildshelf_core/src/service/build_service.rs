//! Build use-case service.
//!
//! # Responsibility
//! - Provide build create/fetch/filter entry points for core callers.
//! - Aggregate draft name validation into one field-addressed report.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::auth::role::Role;
use crate::auth::session::{require_role, AuthError, SessionProvider};
use crate::model::build::{Build, BuildDraft, BuildId};
use crate::model::name::{validate_candidates, validate_name, NameIssue};
use crate::repo::build_repo::{BuildFilter, BuildRepository};
use crate::repo::catalog_repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Build use-case failure.
#[derive(Debug)]
pub enum BuildServiceError {
    /// Caller session is not allowed to mutate the catalog.
    Auth(AuthError),
    /// Field-addressed draft validation failures, whole draft rejected.
    InvalidNames(Vec<NameIssue>),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BuildServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth(err) => write!(f, "{err}"),
            Self::InvalidNames(issues) => {
                write!(f, "invalid names in build draft:")?;
                for issue in issues {
                    write!(f, " [{issue}]")?;
                }
                Ok(())
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BuildServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Auth(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::InvalidNames(_) => None,
        }
    }
}

impl From<AuthError> for BuildServiceError {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<RepoError> for BuildServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Build service facade over repository implementations.
pub struct BuildService<R: BuildRepository> {
    repo: R,
}

impl<R: BuildRepository> BuildService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one build draft and returns its stable id.
    ///
    /// # Contract
    /// - Requires an authenticated user with [`Role::Editor`].
    /// - Missing author/theme/color rows are created on first reference.
    pub fn create_build(
        &mut self,
        session: &dyn SessionProvider,
        draft: &BuildDraft,
    ) -> Result<BuildId, BuildServiceError> {
        require_role(session, Role::Editor)?;

        let issues = validate_draft_names(draft);
        if !issues.is_empty() {
            return Err(BuildServiceError::InvalidNames(issues));
        }

        let id = self.repo.create_build(draft)?;
        info!(
            "event=build_create module=service status=ok colors={} screenshots={}",
            draft.colors.len(),
            draft.screenshots.len()
        );
        Ok(id)
    }

    /// Replaces the schematic file reference for one build.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn set_schematic_path(
        &self,
        session: &dyn SessionProvider,
        id: BuildId,
        path: Option<&str>,
    ) -> Result<(), BuildServiceError> {
        require_role(session, Role::Editor)?;
        self.repo.set_schematic_path(id, path)?;
        Ok(())
    }

    /// Gets one build by stable id.
    pub fn get_build(&self, id: BuildId) -> RepoResult<Option<Build>> {
        self.repo.get_build(id)
    }

    /// Gets one build by exact name.
    pub fn get_build_by_name(&self, name: &str) -> RepoResult<Option<Build>> {
        self.repo.get_build_by_name(name)
    }

    /// Lists builds matching all provided filters.
    pub fn filter_builds(&self, filter: &BuildFilter) -> RepoResult<Vec<Build>> {
        self.repo.filter_builds(filter)
    }
}

fn validate_draft_names(draft: &BuildDraft) -> Vec<NameIssue> {
    let mut issues = Vec::new();
    for (field, value) in [
        ("name", draft.name.as_str()),
        ("author", draft.author.as_str()),
        ("theme", draft.theme.as_str()),
    ] {
        if let Err(error) = validate_name(value) {
            issues.push(NameIssue {
                field: field.to_string(),
                name: value.to_string(),
                error,
            });
        }
    }

    issues.extend(validate_candidates(
        "colors",
        draft.colors.iter().map(String::as_str),
    ));
    issues
}
