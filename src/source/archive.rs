//! Zip archive probing and extraction
//!
//! Transport archives extract alongside the archive file itself, and the
//! resulting directory name is derived from the archive name: the extension
//! goes, and so do the edition suffixes the vendor appends to otherwise
//! identical trees.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{RevupError, Result};
use crate::progress::CopyProgress;

/// Edition suffixes stripped when deriving the extract directory.
const VARIANT_SUFFIXES: &[&str] = &["-advanced", "-sdk"];

/// Extract `path` next to itself when it probes as a zip archive.
///
/// Returns the derived directory on success and `None` when the file is not
/// a readable archive. A broken entry mid-extract is a real error; a failed
/// probe is not.
pub fn extract_alongside(path: &Path) -> Result<Option<PathBuf>> {
    let Ok(file) = File::open(path) else {
        return Ok(None);
    };
    let Ok(mut zip) = ZipArchive::new(file) else {
        return Ok(None);
    };

    let dest = parent_of(path);
    extract_into(&mut zip, &dest, path)?;

    Ok(Some(derive_extract_dir(path)))
}

/// Directory an archive at `path` extracts into, without the extension and
/// without edition suffixes: `product-1.2.3-advanced.zip` -> `product-1.2.3`.
pub fn derive_extract_dir(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = stem.as_str();
    for suffix in VARIANT_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped;
            break;
        }
    }

    parent_of(path).join(name)
}

fn parent_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn extract_into(zip: &mut ZipArchive<File>, dest: &Path, origin: &Path) -> Result<()> {
    let progress = CopyProgress::files(zip.len() as u64, "extracting");

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| extract_error(origin, e))?;

        // Entries that would escape the destination are skipped
        let Some(rel) = entry.enclosed_name() else {
            continue;
        };
        let out = dest.join(rel);

        if entry.is_dir() {
            std::fs::create_dir_all(&out).map_err(|e| extract_error(origin, e))?;
        } else {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent).map_err(|e| extract_error(origin, e))?;
            }

            let mut data = Vec::new();
            entry
                .read_to_end(&mut data)
                .map_err(|e| extract_error(origin, e))?;
            std::fs::write(&out, data).map_err(|e| extract_error(origin, e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    let _ = std::fs::set_permissions(&out, std::fs::Permissions::from_mode(mode));
                }
            }
        }

        progress.tick();
    }

    progress.finish();
    Ok(())
}

fn extract_error(origin: &Path, reason: impl ToString) -> RevupError {
    RevupError::ArchiveExtractFailed {
        path: crate::path_utils::display_path(origin),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, zip_with_entries};

    #[test]
    fn test_derive_strips_extension() {
        let derived = derive_extract_dir(Path::new("/srv/pkg/modx-3.0.4-pl.zip"));
        assert_eq!(derived, PathBuf::from("/srv/pkg/modx-3.0.4-pl"));
    }

    #[test]
    fn test_derive_strips_advanced_suffix() {
        let derived = derive_extract_dir(Path::new("/srv/pkg/product-1.2.3-advanced.zip"));
        assert_eq!(derived, PathBuf::from("/srv/pkg/product-1.2.3"));
    }

    #[test]
    fn test_derive_strips_sdk_suffix() {
        let derived = derive_extract_dir(Path::new("/srv/pkg/product-1.2.3-sdk.zip"));
        assert_eq!(derived, PathBuf::from("/srv/pkg/product-1.2.3"));
    }

    #[test]
    fn test_derive_bare_file_name() {
        let derived = derive_extract_dir(Path::new("site.zip"));
        assert_eq!(derived, PathBuf::from("./site"));
    }

    #[test]
    fn test_probe_rejects_non_archive() {
        let temp = create_temp_dir();
        let file = temp.path().join("readme.txt");
        std::fs::write(&file, "just text").unwrap();

        assert!(extract_alongside(&file).unwrap().is_none());
    }

    #[test]
    fn test_probe_rejects_missing_file() {
        let temp = create_temp_dir();
        let gone = temp.path().join("nothing.zip");
        assert!(extract_alongside(&gone).unwrap().is_none());
    }

    #[test]
    fn test_extract_nested_tree() {
        let temp = create_temp_dir();
        let archive = temp.path().join("modx-3.0.4-pl.zip");
        zip_with_entries(
            &archive,
            &[
                ("modx-3.0.4-pl/setup/index.php", "<?php\n"),
                ("modx-3.0.4-pl/core/docs/changelog.txt", "3.0.4\n"),
            ],
        );

        let derived = extract_alongside(&archive).unwrap().unwrap();

        assert_eq!(derived, temp.path().join("modx-3.0.4-pl"));
        assert!(derived.join("setup/index.php").is_file());
        assert_eq!(
            std::fs::read_to_string(derived.join("core/docs/changelog.txt")).unwrap(),
            "3.0.4\n"
        );
    }

    #[test]
    fn test_extract_suffixed_archive_keeps_inner_name() {
        let temp = create_temp_dir();
        let archive = temp.path().join("modx-3.0.4-pl-advanced.zip");
        zip_with_entries(&archive, &[("modx-3.0.4-pl/setup/index.php", "<?php\n")]);

        let derived = extract_alongside(&archive).unwrap().unwrap();

        // The suffix only exists in the archive name, not in the tree inside
        assert_eq!(derived, temp.path().join("modx-3.0.4-pl"));
        assert!(derived.join("setup").is_dir());
    }
}
