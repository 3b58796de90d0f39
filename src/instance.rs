//! Bootstrapped product runtime handle
//!
//! The runtime is the product's own PHP application. Bootstrapping locates
//! its entry class under the core path and runs the same initialization the
//! manager console performs on every request, in a child interpreter: get
//! the singleton instance, initialize the manager context, activate the
//! error service. What comes back is a handle describing the live
//! installation; the `Installer` creates at most one per run.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{RevupError, Result};
use crate::installer::detect;
use crate::path_utils;

/// Runtime class file relative to a core path.
const RUNTIME_CLASS: &str = "model/modx/modx.class.php";

/// Context key the singleton is obtained under.
const BOOTSTRAP_CONTEXT: &str = "setup";

/// Context the runtime initializes into.
const MANAGER_CONTEXT: &str = "mgr";

/// Handle to a bootstrapped installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInstance {
    core_path: PathBuf,
    config_key: String,
}

impl ProductInstance {
    /// Locate and initialize the product runtime under `core_path`.
    ///
    /// Fails when the runtime class cannot be found or when the bootstrap
    /// run reports failure; either is fatal to the install.
    pub fn bootstrap(core_path: &Path, config_key: &str, interpreter: &str) -> Result<Self> {
        let class_file = core_path.join(RUNTIME_CLASS);
        if !class_file.is_file() {
            return Err(bootstrap_error(
                core_path,
                format!(
                    "runtime class not found at {}",
                    path_utils::display_path(&class_file)
                ),
            ));
        }

        let output = Command::new(interpreter)
            .arg("-r")
            .arg(bootstrap_script(&class_file))
            .output()
            .map_err(|e| {
                bootstrap_error(core_path, format!("failed to spawn {interpreter}: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(bootstrap_error(core_path, reason));
        }

        Ok(Self {
            core_path: core_path.to_path_buf(),
            config_key: config_key.to_string(),
        })
    }

    pub fn core_path(&self) -> &Path {
        &self.core_path
    }

    #[allow(dead_code)] // Used by tests
    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// Live config include backing this instance.
    pub fn config_file(&self) -> PathBuf {
        detect::config_include_path(&self.core_path, &self.config_key)
    }
}

/// The initialization the manager console runs on every request.
fn bootstrap_script(class_file: &Path) -> String {
    format!(
        "require '{}'; $modx = modX::getInstance('{}'); $modx->initialize('{}'); \
         $modx->getService('error', 'error.modError');",
        class_file.display(),
        BOOTSTRAP_CONTEXT,
        MANAGER_CONTEXT
    )
}

fn bootstrap_error(core_path: &Path, reason: String) -> RevupError {
    RevupError::BootstrapFailed {
        path: path_utils::display_path(core_path),
        reason,
    }
}
