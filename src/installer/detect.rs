//! Installed-state detection

use std::path::{Path, PathBuf};

/// Live config include for `config_key` under a core path.
pub fn config_include_path(core_path: &Path, config_key: &str) -> PathBuf {
    core_path
        .join("config")
        .join(format!("{config_key}.inc.php"))
}

/// Whether a live installation already exists under `core_path`.
///
/// The config include for the given key is the sole signal; anything else
/// under `config/` is ignored.
pub fn is_installed(core_path: &Path, config_key: &str) -> bool {
    config_include_path(core_path, config_key).is_file()
}
