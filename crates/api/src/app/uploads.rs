//! Startup-time preparation of the upload directory.

use std::fs;
use std::io;
use std::path::Path;

/// Ensure the upload root exists before the static file service mounts it.
///
/// A missing directory is created rather than failing startup; missing
/// individual files stay per-request 404s (ServeDir semantics).
pub fn prepare_upload_root(root: &Path) -> io::Result<()> {
    if !root.is_dir() {
        fs::create_dir_all(root)?;
    }

    tracing::info!(path = %root.display(), "serving uploads");
    Ok(())
}
