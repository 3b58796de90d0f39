//! Packaging step for git checkouts
//!
//! A checkout is recognizable by its `_build/` control directory. The two
//! build config files ship as samples and must exist under their live names
//! before the packaging script will run; they are regenerable, so
//! overwriting an existing copy is fine.

use std::path::Path;
use std::process::Command;

use crate::error::{RevupError, Result};
use crate::process;
use crate::ui;

/// Build-control marker directory inside a checkout.
pub const BUILD_DIR: &str = "_build";

/// Packaging entry point inside the build-control directory.
pub const PACKAGING_SCRIPT: &str = "transport.core.php";

/// Sample config files copied into place before packaging, (sample, live).
const SAMPLE_CONFIGS: &[(&str, &str)] = &[
    ("build.config.sample.php", "build.config.php"),
    ("build.properties.sample.php", "build.properties.php"),
];

/// Run the product's packaging step inside `checkout`.
///
/// Output passes through to the terminal; a non-zero exit is reported as a
/// build failure.
pub fn run_packaging(checkout: &Path, interpreter: &str) -> Result<()> {
    let build_dir = checkout.join(BUILD_DIR);

    for (sample, live) in SAMPLE_CONFIGS {
        let from = build_dir.join(sample);
        if !from.is_file() {
            continue;
        }
        let to = build_dir.join(live);
        std::fs::copy(&from, &to).map_err(|e| RevupError::FileCopyFailed {
            from: crate::path_utils::display_path(&from),
            to: crate::path_utils::display_path(&to),
            reason: e.to_string(),
        })?;
    }

    ui::step("Running packaging step");
    let status =
        process::run_passthrough(Command::new(interpreter).arg(build_dir.join(PACKAGING_SCRIPT)))?;
    if !status.success() {
        return Err(RevupError::BuildFailed {
            status: status.to_string(),
        });
    }

    Ok(())
}
