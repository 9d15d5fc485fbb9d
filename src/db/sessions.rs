//! Session table operations.
//!
//! An unexpired row existing for a session id means the browser holding
//! that id is logged in; there is no separate flag to keep in sync.

use chrono::{Duration, Utc};
use rusqlite::{params, Connection, Result};

/// Create a new session
pub fn create_session(
    conn: &Connection,
    session_id: &str,
    username: &str,
    duration_hours: i64,
) -> Result<()> {
    let now = Utc::now();
    let expires = now + Duration::hours(duration_hours);
    conn.execute(
        "INSERT INTO sessions (id, username, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)",
        params![session_id, username, now.to_rfc3339(), expires.to_rfc3339()],
    )?;
    Ok(())
}

/// Validate a session and get its username. Expired sessions are invisible.
pub fn get_session_username(conn: &Connection, session_id: &str) -> Result<Option<String>> {
    let now = Utc::now().to_rfc3339();
    let mut stmt =
        conn.prepare("SELECT username FROM sessions WHERE id = ?1 AND expires_at > ?2")?;
    let result = stmt.query_row(params![session_id, now], |row| row.get(0));
    match result {
        Ok(username) => Ok(Some(username)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Delete a session (logout)
pub fn delete_session(conn: &Connection, session_id: &str) -> Result<()> {
    conn.execute("DELETE FROM sessions WHERE id = ?1", params![session_id])?;
    Ok(())
}

/// Cleanup expired sessions, returns count of deleted sessions
pub fn cleanup_expired_sessions(conn: &Connection) -> Result<usize> {
    let now = Utc::now().to_rfc3339();
    let count = conn.execute("DELETE FROM sessions WHERE expires_at < ?1", params![now])?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    #[test]
    fn test_create_and_get_session() {
        let env = TestEnv::new().expect("test env");
        create_session(&env.conn, "abc123", "alice", 1).expect("create");

        let username = get_session_username(&env.conn, "abc123").expect("get");
        assert_eq!(username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_unknown_session_is_none() {
        let env = TestEnv::new().expect("test env");
        assert_eq!(get_session_username(&env.conn, "nope").expect("get"), None);
    }

    #[test]
    fn test_expired_session_is_invisible() {
        let env = TestEnv::new().expect("test env");
        // Negative duration puts expires_at in the past
        create_session(&env.conn, "old", "alice", -1).expect("create");

        assert_eq!(get_session_username(&env.conn, "old").expect("get"), None);
    }

    #[test]
    fn test_delete_session_logs_out() {
        let env = TestEnv::new().expect("test env");
        create_session(&env.conn, "abc123", "alice", 1).expect("create");
        delete_session(&env.conn, "abc123").expect("delete");

        assert_eq!(get_session_username(&env.conn, "abc123").expect("get"), None);
    }

    #[test]
    fn test_delete_missing_session_is_not_an_error() {
        let env = TestEnv::new().expect("test env");
        delete_session(&env.conn, "never-existed").expect("delete");
    }

    #[test]
    fn test_cleanup_removes_only_expired() {
        let env = TestEnv::new().expect("test env");
        create_session(&env.conn, "old", "alice", -1).expect("create");
        create_session(&env.conn, "live", "bob", 1).expect("create");

        let removed = cleanup_expired_sessions(&env.conn).expect("cleanup");
        assert_eq!(removed, 1);
        assert_eq!(
            get_session_username(&env.conn, "live").expect("get").as_deref(),
            Some("bob")
        );
    }
}
