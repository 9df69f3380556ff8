//! Database migration runner
//!
//! Embeds the migration SQL files and applies any that have not been
//! applied yet, each inside its own transaction. Safe to run on every
//! open; already-applied versions are skipped.

use rusqlite::Connection;

use crate::error::{Result, SqliteError};

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "000",
        include_str!("../migrations/000_create_schema_migrations.sql"),
    ),
    (
        "001",
        include_str!("../migrations/001_create_genie_table.sql"),
    ),
];

/// Apply all pending migrations to the database.
///
/// # Errors
///
/// Returns [`SqliteError::Migration`] naming the version that failed.
pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    for (version, sql) in MIGRATIONS {
        if applied(conn, version)? {
            continue;
        }
        apply(conn, version, sql)
            .map_err(|e| SqliteError::Migration(format!("{}: {}", version, e)))?;
    }

    Ok(())
}

/// Run one migration and record its version, atomically.
fn apply(conn: &Connection, version: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, applied_at) VALUES (?, CURRENT_TIMESTAMP)",
        [version],
    )?;
    tx.commit()?;
    Ok(())
}

fn applied(conn: &Connection, version: &str) -> Result<bool> {
    // On a fresh database schema_migrations itself does not exist yet.
    let tracked: bool = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='schema_migrations'")?
        .exists([])?;
    if !tracked {
        return Ok(false);
    }

    Ok(conn
        .prepare("SELECT 1 FROM schema_migrations WHERE version = ?")?
        .exists([version])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_creates_genie_table() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        let exists: bool = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='genie'")
            .unwrap()
            .exists([])
            .unwrap();

        assert!(exists);
    }

    #[test]
    fn test_genie_table_columns() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(genie)").unwrap();
        let columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        for expected in ["id", "host", "path", "tag", "time_created"] {
            assert!(columns.iter().any(|c| c == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_migrate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        migrate(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, MIGRATIONS.len() as i64);
    }
}
