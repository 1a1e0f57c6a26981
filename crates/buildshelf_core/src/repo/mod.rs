//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must validate names before SQL mutations.
//! - Repository APIs return semantic errors (`NotFound`-style) in addition
//!   to DB transport errors.

use crate::db::migrations::latest_version;
use crate::repo::catalog_repo::{RepoError, RepoResult};
use rusqlite::Connection;

pub mod build_repo;
pub mod catalog_repo;

/// Verifies the connection is migrated to the version this binary expects.
pub(crate) fn ensure_schema_version(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }
    Ok(())
}

pub(crate) fn ensure_table(conn: &Connection, table: &'static str) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(RepoError::MissingRequiredTable(table));
    }
    Ok(())
}

pub(crate) fn ensure_column(
    conn: &Connection,
    table: &'static str,
    column: &'static str,
) -> RepoResult<()> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(());
        }
    }
    Err(RepoError::MissingRequiredColumn { table, column })
}
