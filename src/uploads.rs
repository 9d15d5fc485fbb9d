//! Persists profile-image uploads under the public upload directory.
//!
//! Files keep their client-supplied name: there is no sanitization and no
//! collision handling, so a second upload with the same name overwrites
//! the first. The upload root is served read-only at /images, which makes
//! this an unguarded upload surface. Flagged in DESIGN.md, deliberately
//! not hardened here.

use std::io;
use std::path::Path;

use crate::paths;

/// Write uploaded bytes to `<upload_root>/uploads/<filename>` and return
/// the public URL path stored in the profile_image column.
pub fn save_profile_image(upload_root: &Path, filename: &str, bytes: &[u8]) -> io::Result<String> {
    let dir = upload_root.join("uploads");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join(filename), bytes)?;
    Ok(paths::public_image_path(filename))
}
