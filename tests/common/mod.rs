//! Common test utilities for revup integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch area holding a site source and stub interpreter for one test
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the scratch root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create a new scratch area
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create `<root>/<name>` shaped like an extracted site source:
    /// a setup entry point and a core with the runtime class.
    pub fn create_source(&self, name: &str) -> PathBuf {
        let source = self.path.join(name);
        std::fs::create_dir_all(source.join("setup")).expect("Failed to create setup dir");
        std::fs::write(source.join("setup/index.php"), "<?php // setup entry\n")
            .expect("Failed to write setup entry");

        let model_dir = source.join("core/model/modx");
        std::fs::create_dir_all(&model_dir).expect("Failed to create model dir");
        std::fs::write(model_dir.join("modx.class.php"), "<?php class modX {}\n")
            .expect("Failed to write runtime class");

        source
    }

    /// Plant a live config include under `core`, marking it installed.
    pub fn mark_installed(&self, core: &Path, config_key: &str) {
        let config_dir = core.join("config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::write(
            config_dir.join(format!("{config_key}.inc.php")),
            "<?php // live config\n",
        )
        .expect("Failed to write config include");
    }

    /// Write a zip archive containing the given (name, content) files.
    pub fn create_archive(&self, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        use std::io::Write;

        let path = self.path.join(name);
        let file = std::fs::File::create(&path).expect("Failed to create archive");
        let mut zip = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();
        for (entry, content) in entries {
            zip.start_file(*entry, options).expect("Failed to start entry");
            zip.write_all(content.as_bytes())
                .expect("Failed to write entry");
        }
        zip.finish().expect("Failed to finish archive");

        path
    }

    /// Generate a stub interpreter script that logs every invocation's
    /// arguments, snapshots any `--config=` file it is handed (the real one
    /// is deleted right after the run), and exits with `exit_code`.
    ///
    /// Returns the script path; see [`Self::logged_invocations`] and
    /// [`Self::config_snapshot`] for the outputs.
    #[cfg(unix)]
    pub fn stub_interpreter(&self, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.path.join("stub-php.sh");
        let script = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> \"{log}\"\n\
             for arg in \"$@\"; do\n\
             \tcase \"$arg\" in\n\
             \t\t--config=*) cp \"${{arg#--config=}}\" \"{snapshot}\" ;;\n\
             \tesac\n\
             done\n\
             exit {exit_code}\n",
            log = self.invocation_log().display(),
            snapshot = self.config_snapshot_path().display(),
        );
        std::fs::write(&script_path, script).expect("Failed to write stub interpreter");
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");

        script_path
    }

    /// Argument lines logged by the stub interpreter, one per invocation.
    pub fn logged_invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.invocation_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Contents of the config file as setup saw it, if a fresh install ran.
    pub fn config_snapshot(&self) -> Option<String> {
        std::fs::read_to_string(self.config_snapshot_path()).ok()
    }

    fn invocation_log(&self) -> PathBuf {
        self.path.join("stub-invocations.log")
    }

    fn config_snapshot_path(&self) -> PathBuf {
        self.path.join("config-snapshot.xml")
    }
}
