//! Build repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist builds together with their catalog links in one transaction.
//! - Provide fetch-by-id, fetch-by-name and filter queries.
//!
//! # Invariants
//! - `create_build` resolves author/theme/colors by get-or-create, so a
//!   catalog row exists before any relation row points at it.
//! - Filter matching is case-insensitive on every field; color membership is
//!   any-match within the requested set.
//! - Result ordering is deterministic: `updated_at DESC, uuid ASC`.

use crate::model::build::{Build, BuildDraft, BuildId};
use crate::model::name::validate_name;
use crate::repo::catalog_repo::{RepoError, RepoResult};
use crate::repo::{ensure_column, ensure_schema_version, ensure_table};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

const BUILD_SELECT_SQL: &str = "SELECT
    b.uuid AS uuid,
    b.name AS name,
    a.name AS author,
    t.name AS theme,
    b.description AS description,
    b.schematic_path AS schematic_path,
    b.updated_at AS updated_at
FROM builds b
INNER JOIN authors a ON a.id = b.author_id
INNER JOIN themes t ON t.id = b.theme_id";

/// Optional conjunctive filters for build listing.
///
/// Absent fields match everything; the color set matches builds tagged with
/// any of the requested colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFilter {
    pub author: Option<String>,
    pub name: Option<String>,
    pub theme: Option<String>,
    pub colors: Vec<String>,
}

/// Repository interface for build persistence and queries.
pub trait BuildRepository {
    /// Persists one draft and its catalog links; returns the new build id.
    fn create_build(&mut self, draft: &BuildDraft) -> RepoResult<BuildId>;
    /// Gets one build by stable id.
    fn get_build(&self, id: BuildId) -> RepoResult<Option<Build>>;
    /// Gets one build by exact name; newest first when names collide.
    fn get_build_by_name(&self, name: &str) -> RepoResult<Option<Build>>;
    /// Lists builds matching all provided filters.
    fn filter_builds(&self, filter: &BuildFilter) -> RepoResult<Vec<Build>>;
    /// Replaces the schematic file reference of one build.
    fn set_schematic_path(&self, id: BuildId, path: Option<&str>) -> RepoResult<()>;
}

/// SQLite-backed build repository.
pub struct SqliteBuildRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteBuildRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_schema_version(conn)?;
        ensure_table(conn, "builds")?;
        for column in [
            "uuid",
            "name",
            "author_id",
            "theme_id",
            "description",
            "schematic_path",
            "updated_at",
        ] {
            ensure_column(conn, "builds", column)?;
        }
        ensure_table(conn, "build_colors")?;
        ensure_table(conn, "build_screenshots")?;
        Ok(Self { conn })
    }
}

impl BuildRepository for SqliteBuildRepository<'_> {
    fn create_build(&mut self, draft: &BuildDraft) -> RepoResult<BuildId> {
        validate_name(&draft.name)?;
        validate_name(&draft.author)?;
        validate_name(&draft.theme)?;
        for color in &draft.colors {
            validate_name(color)?;
        }

        let uuid = Uuid::new_v4();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let author_id = get_or_create_row(&tx, "authors", &draft.author)?;
        let theme_id = get_or_create_row(&tx, "themes", &draft.theme)?;

        tx.execute(
            "INSERT INTO builds (uuid, name, author_id, theme_id, description, schematic_path)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                uuid.to_string(),
                draft.name.as_str(),
                author_id,
                theme_id,
                draft.description.as_str(),
                draft.schematic_path.as_deref(),
            ],
        )?;

        for color in &draft.colors {
            let color_id = get_or_create_row(&tx, "colors", color)?;
            tx.execute(
                "INSERT OR IGNORE INTO build_colors (build_uuid, color_id) VALUES (?1, ?2);",
                params![uuid.to_string(), color_id],
            )?;
        }

        for (position, path) in draft.screenshots.iter().enumerate() {
            tx.execute(
                "INSERT INTO build_screenshots (build_uuid, position, path)
                 VALUES (?1, ?2, ?3);",
                params![uuid.to_string(), position as i64, path.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(uuid)
    }

    fn get_build(&self, id: BuildId) -> RepoResult<Option<Build>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BUILD_SELECT_SQL} WHERE b.uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_build_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn get_build_by_name(&self, name: &str) -> RepoResult<Option<Build>> {
        let mut stmt = self.conn.prepare(&format!(
            "{BUILD_SELECT_SQL}
             WHERE b.name = ?1
             ORDER BY b.updated_at DESC, b.uuid ASC
             LIMIT 1;"
        ))?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_build_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn filter_builds(&self, filter: &BuildFilter) -> RepoResult<Vec<Build>> {
        let mut sql = format!("{BUILD_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(author) = filter.author.as_ref() {
            sql.push_str(" AND a.name = ? COLLATE NOCASE");
            bind_values.push(Value::Text(author.clone()));
        }

        if let Some(name) = filter.name.as_ref() {
            sql.push_str(" AND b.name = ? COLLATE NOCASE");
            bind_values.push(Value::Text(name.clone()));
        }

        if let Some(theme) = filter.theme.as_ref() {
            sql.push_str(" AND t.name = ? COLLATE NOCASE");
            bind_values.push(Value::Text(theme.clone()));
        }

        if !filter.colors.is_empty() {
            let placeholders = vec!["?"; filter.colors.len()].join(", ");
            sql.push_str(&format!(
                " AND EXISTS (
                    SELECT 1
                    FROM build_colors bc
                    INNER JOIN colors c ON c.id = bc.color_id
                    WHERE bc.build_uuid = b.uuid
                      AND c.name COLLATE NOCASE IN ({placeholders})
                )"
            ));
            for color in &filter.colors {
                bind_values.push(Value::Text(color.clone()));
            }
        }

        sql.push_str(" ORDER BY b.updated_at DESC, b.uuid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut builds = Vec::new();
        while let Some(row) = rows.next()? {
            builds.push(parse_build_row(self.conn, row)?);
        }
        Ok(builds)
    }

    fn set_schematic_path(&self, id: BuildId, path: Option<&str>) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE builds
             SET
                schematic_path = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), path],
        )?;

        if changed == 0 {
            return Err(RepoError::BuildNotFound(id));
        }

        Ok(())
    }
}

fn get_or_create_row(tx: &Transaction<'_>, table: &'static str, name: &str) -> RepoResult<i64> {
    tx.execute(
        &format!("INSERT OR IGNORE INTO {table} (name) VALUES (?1);"),
        [name],
    )?;
    let id = tx.query_row(
        &format!("SELECT id FROM {table} WHERE name = ?1;"),
        [name],
        |row| row.get(0),
    )?;
    Ok(id)
}

fn parse_build_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Build> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in builds.uuid"))
    })?;

    Ok(Build {
        uuid,
        name: row.get("name")?,
        author: row.get("author")?,
        theme: row.get("theme")?,
        description: row.get("description")?,
        colors: load_colors_for_build(conn, &uuid_text)?,
        screenshots: load_screenshots_for_build(conn, &uuid_text)?,
        schematic_path: row.get("schematic_path")?,
        updated_at: row.get("updated_at")?,
    })
}

fn load_colors_for_build(conn: &Connection, build_uuid: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT c.name
         FROM build_colors bc
         INNER JOIN colors c ON c.id = bc.color_id
         WHERE bc.build_uuid = ?1
         ORDER BY c.name COLLATE NOCASE ASC;",
    )?;
    let mut rows = stmt.query([build_uuid])?;
    let mut colors = Vec::new();
    while let Some(row) = rows.next()? {
        colors.push(row.get(0)?);
    }
    Ok(colors)
}

fn load_screenshots_for_build(conn: &Connection, build_uuid: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT path
         FROM build_screenshots
         WHERE build_uuid = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([build_uuid])?;
    let mut screenshots = Vec::new();
    while let Some(row) = rows.next()? {
        screenshots.push(row.get(0)?);
    }
    Ok(screenshots)
}
