//! Install orchestration
//!
//! `Installer` drives the whole sequence for one site: resolve the source,
//! relocate folders, decide fresh-install vs upgrade from filesystem
//! evidence, generate the transient setup config when needed, run the
//! product's setup program, and hand back a bootstrapped runtime handle.
//!
//! The sequence is strictly linear and fully synchronous; the filesystem is
//! the only shared resource and is assumed uncontended for the duration of
//! one `install` call.
//!
//! ## Module Organization
//!
//! - `relocate.rs`: folder relocation to custom destinations
//! - `detect.rs`: installed-state detection
//! - `config_xml.rs`: transient setup config generation
//! - `setup.rs`: setup program invocation

pub mod config_xml;
pub mod detect;
pub mod relocate;
pub mod setup;

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::{RevupError, Result};
use crate::instance::ProductInstance;
use crate::path_utils;
use crate::source;
use crate::ui;

use setup::SetupInvocation;

/// Default core folder name inside a resolved source.
const CORE_DIR: &str = "core";

/// Orchestrates one site install or upgrade.
pub struct Installer {
    /// Where the site files currently live, as given by the caller
    source: PathBuf,
    /// Folders to relocate: name inside the source -> target path
    destinations: IndexMap<String, PathBuf>,
    /// Interpreter for the build, setup, and bootstrap runs
    interpreter: String,
    /// Bootstrapped runtime handle, created at most once
    instance: Option<ProductInstance>,
}

impl Installer {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destinations: IndexMap::new(),
            interpreter: "php".to_string(),
            instance: None,
        }
    }

    /// Relocate folders of the resolved source to custom destinations.
    pub fn with_destinations(mut self, destinations: IndexMap<String, PathBuf>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Interpreter binary for the build, setup, and bootstrap runs.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Run the full install or upgrade sequence and return the runtime
    /// handle.
    ///
    /// Fails before touching the filesystem when the source is neither a
    /// directory nor a file, and right after resolution when the resolved
    /// tree has no `setup/` entry point.
    pub fn install(
        &mut self,
        config: &IndexMap<String, String>,
        config_key: &str,
    ) -> Result<&ProductInstance> {
        if !self.source.is_dir() && !self.source.is_file() {
            return Err(RevupError::InvalidSource {
                path: path_utils::display_path(&self.source),
            });
        }

        let resolved = source::resolve(&self.source, &self.interpreter)?;
        if !resolved.join("setup").is_dir() {
            return Err(RevupError::UnresolvableSource {
                path: path_utils::display_path(&resolved),
            });
        }
        let resolved = path_utils::normalize_lossy(&resolved);

        relocate::relocate_folders(&resolved, &self.destinations)?;

        // Relocation can move the core, so the detector runs after it
        let core_path = self.core_path(&resolved);
        let invocation = if detect::is_installed(&core_path, config_key) {
            ui::step("Existing installation detected, upgrading");
            SetupInvocation::upgrade(&resolved, &core_path)
        } else {
            ui::step("No existing installation, performing fresh install");
            let config_file = config_xml::build_config_file(config)?;
            SetupInvocation::fresh(&resolved, config_file)
        };

        let status = invocation.run(&self.interpreter)?;
        // The transient config never outlives the run, whatever setup said
        invocation.cleanup();
        if !status.success() {
            return Err(RevupError::SetupFailed {
                status: status.to_string(),
            });
        }

        let instance = match self.instance.take() {
            Some(existing) => existing,
            None => ProductInstance::bootstrap(&core_path, config_key, &self.interpreter)?,
        };
        Ok(self.instance.insert(instance))
    }

    /// The runtime handle from a completed `install` run, if any.
    #[allow(dead_code)] // Used by tests
    pub fn instance(&self) -> Option<&ProductInstance> {
        self.instance.as_ref()
    }

    /// Where the core folder lives: the custom destination when one is
    /// configured, the default location inside the source otherwise.
    fn core_path(&self, resolved: &Path) -> PathBuf {
        match self.destinations.get(CORE_DIR) {
            Some(target) => path_utils::normalize_lossy(target),
            None => path_utils::normalize_lossy(&resolved.join(CORE_DIR)),
        }
    }
}
