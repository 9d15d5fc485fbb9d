//! Test utilities for database setup.
//!
//! Reuses the authoritative schema initialization, eliminating schema
//! duplication in test code.

use rusqlite::Connection;
use tempfile::TempDir;

/// Test environment with a database using the authoritative schema.
///
/// The temporary directory is kept alive for the lifetime of the value,
/// ensuring automatic cleanup when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Database connection with the full schema applied
    pub conn: Connection,
}

impl TestEnv {
    /// Create a test environment with an initialized database.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("roster.db");
        let conn = Connection::open(&db_path)?;
        crate::db::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }
}
