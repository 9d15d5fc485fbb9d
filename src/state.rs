//! Application state threaded through handlers.

use std::path::PathBuf;

use crate::db::DbPool;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared database (users, sessions)
    pub db: DbPool,

    /// Upload root served at /images; profile images land in uploads/
    pub upload_root: PathBuf,
}

impl AppState {
    pub fn new(db: DbPool, upload_root: PathBuf) -> Self {
        Self { db, upload_root }
    }
}
