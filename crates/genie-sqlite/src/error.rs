//! Error types for the SQLite storage backend

use genie_core::store::StoreError;
use thiserror::Error;

/// Result type for SQLite storage operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur during SQLite storage operations
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection or query error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(String),

    /// No home directory available for the default database location
    #[error("could not determine home directory for the tag database")]
    NoHomeDir,

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert SqliteError to StoreError for the storage traits
impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Database(e) => StoreError::Backend(format!("SQLite: {}", e)),
            SqliteError::Migration(msg) => StoreError::Backend(format!("migration: {}", msg)),
            SqliteError::NoHomeDir => StoreError::Backend("no home directory".to_string()),
            SqliteError::Io(e) => StoreError::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_keep_their_variant_through_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match StoreError::from(SqliteError::Io(io)) {
            StoreError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
