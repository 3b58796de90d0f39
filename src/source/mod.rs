//! Site source resolution
//!
//! A source arrives in one of three shapes, probed from the filesystem
//! rather than declared by the caller:
//!
//! - an extracted directory, installable as-is
//! - a zip archive that extracts to such a directory
//! - a git checkout carrying a `_build/` control directory, which needs the
//!   product's packaging step before anything can be installed from it
//!
//! `resolve` normalizes all three into a directory path. Only real work
//! failures are reported (a broken archive mid-extract, a failed build run);
//! a source the resolver cannot make sense of is returned unchanged so the
//! orchestrator's validation gate can reject it with a clean message
//! instead of a crash.
//!
//! ## Module Organization
//!
//! - `archive.rs`: zip probing, extraction, and extract-dir derivation
//! - `build.rs`: packaging step for git checkouts

pub mod archive;
pub mod build;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Shape of a source path, probed once per resolution round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain directory, ready for validation
    Directory,
    /// Existing file, candidate zip archive
    ArchiveFile,
    /// Directory carrying the `_build/` control marker
    BuildCheckout,
}

impl SourceKind {
    /// Classify an existing path; `None` when the path is gone.
    pub fn classify(path: &Path) -> Option<SourceKind> {
        if path.is_file() {
            Some(SourceKind::ArchiveFile)
        } else if path.is_dir() {
            if path.join(build::BUILD_DIR).is_dir() {
                Some(SourceKind::BuildCheckout)
            } else {
                Some(SourceKind::Directory)
            }
        } else {
            None
        }
    }
}

/// Resolve a source path into a directory candidate for validation.
///
/// A checkout gets its packaging step run at most once, then resolution
/// continues on whatever the build produced. An archive is extracted
/// alongside itself and resolution continues from the derived directory.
/// Resolving an already-extracted directory is a no-op, so the function is
/// idempotent over its own output.
pub fn resolve(spec: &Path, interpreter: &str) -> Result<PathBuf> {
    let mut current = spec.to_path_buf();
    let mut built = false;

    loop {
        match SourceKind::classify(&current) {
            Some(SourceKind::BuildCheckout) if !built => {
                build::run_packaging(&current, interpreter)?;
                built = true;
            }
            Some(SourceKind::ArchiveFile) => match archive::extract_alongside(&current)? {
                Some(derived) if derived != current => current = derived,
                _ => break,
            },
            _ => break,
        }
    }

    Ok(current)
}
