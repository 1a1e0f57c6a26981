//! Catalog repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide exact-name lookup and insert APIs over the three catalog
//!   tables.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must pass `validate_name` before SQL mutations.
//! - Name matching is byte-exact; the `UNIQUE` constraint and the lookup use
//!   the same collation, so create-or-skip can never disagree with the
//!   constraint.

use crate::db::DbError;
use crate::model::build::BuildId;
use crate::model::catalog::{CatalogEntry, CatalogId, CatalogKind};
use crate::model::name::{validate_name, NameValidationError};
use crate::repo::{ensure_column, ensure_schema_version, ensure_table};
use rusqlite::{Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for catalog and build persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(NameValidationError),
    Db(DbError),
    /// Target build does not exist.
    BuildNotFound(BuildId),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::BuildNotFound(id) => write!(f, "build not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted catalog data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NameValidationError> for RepoError {
    fn from(value: NameValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for catalog rows of every kind.
pub trait CatalogRepository {
    /// Finds one row by exact name.
    fn find_by_name(&self, kind: CatalogKind, name: &str) -> RepoResult<Option<CatalogEntry>>;
    /// Inserts one validated row and returns its id.
    fn insert_name(&self, kind: CatalogKind, name: &str) -> RepoResult<CatalogId>;
    /// Lists all rows of one kind sorted case-insensitively by name.
    fn list(&self, kind: CatalogKind) -> RepoResult<Vec<CatalogEntry>>;
}

/// SQLite-backed catalog repository.
pub struct SqliteCatalogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCatalogRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema_version(conn)?;
        for kind in CatalogKind::ALL {
            let table = kind_table(kind);
            ensure_table(conn, table)?;
            ensure_column(conn, table, "id")?;
            ensure_column(conn, table, "name")?;
        }
        Ok(Self { conn })
    }
}

impl CatalogRepository for SqliteCatalogRepository<'_> {
    fn find_by_name(&self, kind: CatalogKind, name: &str) -> RepoResult<Option<CatalogEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!(
                    "SELECT id, name FROM {} WHERE name = ?1;",
                    kind_table(kind)
                ),
                [name],
                |row| {
                    Ok(CatalogEntry {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(entry)
    }

    fn insert_name(&self, kind: CatalogKind, name: &str) -> RepoResult<CatalogId> {
        validate_name(name)?;

        self.conn.execute(
            &format!("INSERT INTO {} (name) VALUES (?1);", kind_table(kind)),
            [name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list(&self, kind: CatalogKind) -> RepoResult<Vec<CatalogEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, name FROM {} ORDER BY name COLLATE NOCASE ASC, id ASC;",
            kind_table(kind)
        ))?;

        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(CatalogEntry {
                id: row.get(0)?,
                name: row.get(1)?,
            });
        }
        Ok(entries)
    }
}

// Table names are a closed set; never interpolate caller input here.
pub(crate) fn kind_table(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Author => "authors",
        CatalogKind::Theme => "themes",
        CatalogKind::Color => "colors",
    }
}
