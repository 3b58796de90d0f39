//! Setup program invocation
//!
//! Builds the single command line handed to the product's setup entry
//! point. Exactly one of the two install modes applies. The transient
//! config file only exists on the fresh-install path and is removed as soon
//! as the run is over, whatever its outcome.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::Result;
use crate::installer::config_xml;
use crate::process;

/// Setup entry point relative to a resolved source.
const SETUP_ENTRY: &str = "setup/index.php";

/// Which install mode setup runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupMode {
    /// Fresh install driven by a generated config file
    New { config_file: PathBuf },
    /// In-place upgrade of an existing core
    Upgrade { core_path: PathBuf },
}

/// A fully assembled setup run.
#[derive(Debug)]
pub struct SetupInvocation {
    entry_point: PathBuf,
    mode: SetupMode,
}

impl SetupInvocation {
    /// Fresh install against a generated config file.
    pub fn fresh(source: &Path, config_file: PathBuf) -> Self {
        Self {
            entry_point: source.join(SETUP_ENTRY),
            mode: SetupMode::New { config_file },
        }
    }

    /// Upgrade of the installation under `core_path`.
    pub fn upgrade(source: &Path, core_path: &Path) -> Self {
        Self {
            entry_point: source.join(SETUP_ENTRY),
            mode: SetupMode::Upgrade {
                core_path: core_path.to_path_buf(),
            },
        }
    }

    /// Arguments handed to the interpreter, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![self.entry_point.clone().into_os_string()];
        match &self.mode {
            SetupMode::New { config_file } => {
                args.push(OsString::from("--installmode=new"));
                let mut config = OsString::from("--config=");
                config.push(config_file);
                args.push(config);
            }
            SetupMode::Upgrade { core_path } => {
                args.push(OsString::from("--installmode=upgrade"));
                let mut core = OsString::from("--core_path=");
                core.push(core_path);
                args.push(core);
            }
        }
        args
    }

    /// Run setup synchronously with output passed through to the terminal.
    pub fn run(&self, interpreter: &str) -> Result<ExitStatus> {
        process::run_passthrough(Command::new(interpreter).args(self.args()))
    }

    /// Remove the transient config file; a no-op for upgrades.
    pub fn cleanup(&self) {
        if let SetupMode::New { config_file } = &self.mode {
            config_xml::remove_config_file(config_file);
        }
    }

    #[allow(dead_code)] // Used by tests
    pub fn mode(&self) -> &SetupMode {
        &self.mode
    }
}
