//! Application configuration.
//!
//! Database location resolves with priority config.toml > .env > default;
//! the server port comes from the PORT env var with a fallback.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Database Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

/// Load database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Priority 1: config.toml
    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(db) = config.database {
                if let Some(path) = db.path {
                    tracing::info!("Using database from config.toml: {}", path);
                    return PathBuf::from(path);
                }
            }
        }
    }

    // Priority 2: .env DATABASE_PATH
    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    // Default
    let default = PathBuf::from(paths::db_path());
    tracing::info!("Using default database path: {}", default.display());
    default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Default server port when PORT is unset
pub const DEFAULT_PORT: u16 = 3000;

/// Server port (PORT env var or default)
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, server_port())
}

// ==================== Session Configuration ====================

/// Probability threshold for expired-session sweeps (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each login
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

// ==================== Response Headers ====================

/// Development content security policy: permits localhost websocket
/// connections and jsdelivr-hosted scripts, styles and fonts.
pub const CSP_POLICY: &str = "default-src 'self' http://localhost:* ws://localhost:* wss://localhost:*; \
    connect-src 'self' http://localhost:* ws://localhost:* wss://localhost:*; \
    script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
    style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
    img-src 'self' data: https:; \
    font-src 'self' https://cdn.jsdelivr.net;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_format() {
        let addr = server_bind_addr();
        assert!(addr.starts_with(SERVER_ADDR));
        assert!(addr.contains(':'));
    }

    #[test]
    fn test_csp_is_a_valid_header_value() {
        // Header values must be visible ASCII
        assert!(CSP_POLICY.chars().all(|c| (' '..='~').contains(&c)));
    }
}
