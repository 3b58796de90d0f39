//! Folder relocation
//!
//! Entries of the destination map that do not apply to the resolved source
//! are skipped without side effects, so one relocation map can serve
//! several product versions.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{RevupError, Result};
use crate::path_utils;
use crate::progress::CopyProgress;

/// Copy each mapped subtree of `source` into its target directory.
///
/// An entry is skipped entirely when its key or target is empty, or when
/// `<source>/<folder>` is not a directory. The target directory of an
/// applied entry is created as needed.
pub fn relocate_folders(source: &Path, destinations: &IndexMap<String, PathBuf>) -> Result<()> {
    for (folder, target) in destinations {
        if folder.is_empty() || target.as_os_str().is_empty() {
            continue;
        }
        let from = source.join(folder);
        if !from.is_dir() {
            continue;
        }
        copy_tree(&from, target)?;
    }
    Ok(())
}

/// Recursively copy the contents of `from` into `to`, creating `to` first.
fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    let entries: Vec<walkdir::DirEntry> = WalkDir::new(from)
        .min_depth(1)
        .into_iter()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| copy_error(from, to, e))?;

    std::fs::create_dir_all(to).map_err(|e| copy_error(from, to, e))?;

    let files = entries.iter().filter(|e| e.file_type().is_file()).count();
    let progress = CopyProgress::files(files as u64, "copying");

    for entry in &entries {
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| copy_error(from, to, e))?;
        let dest = to.join(rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest).map_err(|e| copy_error(entry.path(), &dest, e))?;
        } else {
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).map_err(|e| copy_error(entry.path(), &dest, e))?;
            }
            std::fs::copy(entry.path(), &dest).map_err(|e| copy_error(entry.path(), &dest, e))?;
            progress.tick();
        }
    }

    progress.finish();
    Ok(())
}

fn copy_error(from: &Path, to: &Path, reason: impl ToString) -> RevupError {
    RevupError::FileCopyFailed {
        from: path_utils::display_path(from),
        to: path_utils::display_path(to),
        reason: reason.to_string(),
    }
}
