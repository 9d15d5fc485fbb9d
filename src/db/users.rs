//! User record operations.
//!
//! Passwords are stored and compared as plain text, matching the observed
//! behavior of the system this replaces. Whether that is acceptable
//! (internal demo) or must be hardened is an open question tracked in
//! DESIGN.md rather than silently decided here.

use rusqlite::{params, Connection, Result};

/// A row in the users table
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub profile_image: Option<String>,
}

/// Check whether a username/password pair matches at least one record.
/// Both columns are compared exactly and case-sensitively.
pub fn credentials_match(conn: &Connection, username: &str, password: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?1 AND password = ?2",
        params![username, password],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Fetch all user records in whatever order the store returns them
pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, username, password, profile_image FROM users")?;
    let users = stmt
        .query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                profile_image: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(users)
}

/// Insert a new user record, returns the generated id
pub fn insert_user(
    conn: &Connection,
    username: &str,
    password: &str,
    profile_image: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (username, password, profile_image) VALUES (?1, ?2, ?3)",
        params![username, password, profile_image],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete at most one record by id, returns the number of rows affected
pub fn delete_user(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM users WHERE id = ?1", params![id])
}
