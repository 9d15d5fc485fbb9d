//! Project path functions - single source of truth for all file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//! - `UPLOAD_DIR`: Override the upload root served at /images (default: "images")
//!
//! This allows running isolated server instances side by side:
//! ```bash
//! DATA_DIR=data/test UPLOAD_DIR=images/test PORT=3001 cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Lazily initialized upload root from UPLOAD_DIR env var
static UPLOAD_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// URL prefix the upload root is served under
pub const IMAGES_URL_PREFIX: &str = "/images";

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database path
pub fn db_path() -> String {
    format!("{}/roster.db", data_dir())
}

/// Upload root directory, served read-only at /images
pub fn upload_root() -> &'static str {
    UPLOAD_DIR_VALUE.get_or_init(|| env::var("UPLOAD_DIR").unwrap_or_else(|_| "images".to_string()))
}

/// Directory profile images are written into
pub fn uploads_dir() -> String {
    format!("{}/uploads", upload_root())
}

/// Public URL path for an uploaded file, as stored in profile_image
pub fn public_image_path(filename: &str) -> String {
    format!("{}/uploads/{}", IMAGES_URL_PREFIX, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: env var overrides can't be exercised here because OnceLock
    // initializes once per process. These verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_db_path_format() {
        let path = db_path();
        assert!(path.ends_with("/roster.db"));
    }

    #[test]
    fn test_uploads_dir_format() {
        let path = uploads_dir();
        assert!(path.ends_with("/uploads"));
    }

    #[test]
    fn test_public_image_path() {
        assert_eq!(public_image_path("photo.png"), "/images/uploads/photo.png");
    }
}
