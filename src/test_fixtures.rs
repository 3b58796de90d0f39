//! Test fixtures shared across unit tests.
//!
//! Source trees here mirror the layout setup expects: a `setup/` entry
//! point and a `core/` folder carrying the runtime class, so install runs
//! against a stub interpreter can go all the way through bootstrap.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory outside the current working directory.
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Create `<parent>/<name>` shaped like an extracted site source.
pub fn create_site_tree(parent: &Path, name: &str) -> PathBuf {
    let site = parent.join(name);
    std::fs::create_dir_all(site.join("setup")).expect("Failed to create setup dir");
    std::fs::write(site.join("setup/index.php"), "<?php // setup entry\n")
        .expect("Failed to write setup entry");

    let model_dir = site.join("core/model/modx");
    std::fs::create_dir_all(&model_dir).expect("Failed to create core model dir");
    std::fs::write(model_dir.join("modx.class.php"), "<?php class modX {}\n")
        .expect("Failed to write runtime class");

    site
}

/// Write a zip archive at `path` containing the given (name, content) files.
pub fn zip_with_entries(path: &Path, entries: &[(&str, &str)]) {
    let file = std::fs::File::create(path).expect("Failed to create archive file");
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (name, content) in entries {
        zip.start_file(*name, options).expect("Failed to start entry");
        zip.write_all(content.as_bytes())
            .expect("Failed to write entry");
    }

    zip.finish().expect("Failed to finish archive");
}

/// Switch the process working directory, restoring it on drop.
pub struct CwdGuard {
    previous: PathBuf,
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// Enter `dir` for the duration of the returned guard. Only meaningful in
/// tests marked `#[serial_test::serial]`, since the working directory is
/// process-wide.
pub fn cwd_guard(dir: &Path) -> CwdGuard {
    let previous = std::env::current_dir().expect("Failed to read current dir");
    std::env::set_current_dir(dir).expect("Failed to enter directory");
    CwdGuard { previous }
}
