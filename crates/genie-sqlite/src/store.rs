//! SQLite-backed tag store implementing the core storage traits

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::Local;
use genie_core::store::{StoreError, StoreResult, TagIndex, TagStore};
use rusqlite::Connection;

use crate::error::{Result, SqliteError};

/// Timestamp layout for `time_created`, matching the records written by
/// earlier releases ("2024-01-01 3:07 PM +0000").
const TIME_FORMAT: &str = "%Y-%m-%d %-I:%M %p %z";

/// SQLite-backed tag store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a store from a connection that already has migrations
    /// applied. Use [`crate::migrate::migrate`] to initialize a fresh
    /// database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Open (creating and migrating if needed) a file-backed store.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Open the store at the default location, `~/.geniedb`.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// The default database location: `.geniedb` in the home directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".geniedb"))
            .ok_or(SqliteError::NoHomeDir)
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Hostname recorded on new rows.
    fn host() -> String {
        std::env::var("HOSTNAME")
            .or_else(|_| std::env::var("HOST"))
            .unwrap_or_else(|_| "unknown".to_string())
    }

    fn query_strings(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<std::result::Result<_, _>>()?)
    }
}

impl TagIndex for SqliteStore {
    fn paths_with_tag(&self, tag: &str) -> StoreResult<HashSet<String>> {
        let paths = self
            .query_strings("SELECT DISTINCT path FROM genie WHERE tag = ?", &[&tag])
            .map_err(StoreError::from)?;
        Ok(paths.into_iter().collect())
    }

    fn all_paths(&self) -> StoreResult<HashSet<String>> {
        let paths = self
            .query_strings("SELECT DISTINCT path FROM genie", &[])
            .map_err(StoreError::from)?;
        Ok(paths.into_iter().collect())
    }
}

impl TagStore for SqliteStore {
    fn tag(&mut self, path: &str, tag: &str) -> StoreResult<()> {
        let now = Local::now().format(TIME_FORMAT).to_string();
        self.conn
            .execute(
                "INSERT INTO genie (host, path, tag, time_created) VALUES (?, ?, ?, ?)",
                rusqlite::params![Self::host(), path, tag, now],
            )
            .map_err(|e| StoreError::Backend(format!("SQLite: {}", e)))?;
        Ok(())
    }

    fn untag(&mut self, path: &str, tag: &str) -> StoreResult<bool> {
        let removed = self
            .conn
            .execute(
                "DELETE FROM genie WHERE path = ? AND tag = ?",
                rusqlite::params![path, tag],
            )
            .map_err(|e| StoreError::Backend(format!("SQLite: {}", e)))?;
        Ok(removed > 0)
    }

    fn tags_for_path(&self, path: &str) -> StoreResult<Vec<String>> {
        self.query_strings(
            "SELECT DISTINCT tag FROM genie WHERE path = ? ORDER BY tag",
            &[&path],
        )
        .map_err(StoreError::from)
    }

    fn all_tags(&self) -> StoreResult<Vec<String>> {
        self.query_strings("SELECT DISTINCT tag FROM genie ORDER BY tag", &[])
            .map_err(StoreError::from)
    }
}
