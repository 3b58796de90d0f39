//! Install command implementation
//!
//! Gathers the setup config map and destination map from the CLI and an
//! optional profile file, then hands the run to the `Installer` pipeline:
//!
//! 1. Validate and resolve the source
//! 2. Relocate folders to custom destinations
//! 3. Detect fresh install vs upgrade
//! 4. Generate the transient setup config (fresh installs only)
//! 5. Run the product's setup program and inspect its exit
//! 6. Bootstrap and report the runtime handle

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::config::InstallProfile;
use crate::error::{RevupError, Result};
use crate::installer::Installer;
use crate::path_utils;
use crate::ui;

/// Run install command
pub fn run(args: InstallArgs, verbose: bool) -> Result<()> {
    let profile = match &args.config_file {
        Some(path) => InstallProfile::load(path)?,
        None => InstallProfile::default(),
    };

    let mut config = profile.config_map()?;
    for entry in &args.set {
        let (key, value) = parse_key_value(entry)?;
        config.insert(key, value);
    }

    let mut destinations = profile.destinations.clone();
    for entry in &args.moves {
        let (folder, target) = parse_key_value(entry)?;
        destinations.insert(folder, PathBuf::from(target));
    }

    if verbose {
        ui::detail("Config entries:", &config.len().to_string());
        for (folder, target) in &destinations {
            ui::detail(
                "Relocate:",
                &format!("{} -> {}", folder, path_utils::display_path(target)),
            );
        }
    }

    ui::step(&format!(
        "Installing from {}",
        path_utils::display_path(&args.source)
    ));

    let mut installer = Installer::new(args.source)
        .with_destinations(destinations)
        .with_interpreter(args.php);
    let instance = installer.install(&config, &args.config_key)?;

    ui::success("Site is ready");
    ui::path_detail("Core path:", instance.core_path());
    ui::path_detail("Config file:", &instance.config_file());

    Ok(())
}

/// Split a KEY=VALUE argument; the value may itself contain '='.
fn parse_key_value(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(RevupError::InvalidKeyValue {
            arg: arg.to_string(),
        }),
    }
}
