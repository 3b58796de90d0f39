//! Path helpers shared across the install pipeline.

use std::env;
use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::error::Result;

/// Absolute form of `path`, resolved against the current working directory.
/// The path does not have to exist.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_lossy(path));
    }
    let cwd = env::current_dir()?;
    Ok(normalize_lossy(&cwd.join(path)))
}

/// Normalized form of `path` when it resolves, the path unchanged otherwise.
/// Handles macOS /private/var symlinks and Windows verbatim prefixes.
pub fn normalize_lossy(path: &Path) -> PathBuf {
    path.normalize()
        .map(|p| p.into_path_buf())
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Display form of a path without Windows verbatim prefixes.
pub fn display_path(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}
