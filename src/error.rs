//! Error types and handling for revup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for revup operations
#[derive(Error, Diagnostic, Debug)]
pub enum RevupError {
    // Source errors
    #[error("Invalid source: {path}")]
    #[diagnostic(
        code(revup::source::invalid),
        help("Pass an extracted site tree, a zip archive, or a git checkout of the product")
    )]
    InvalidSource { path: String },

    #[error("Source could not be resolved to an installable tree: {path}")]
    #[diagnostic(
        code(revup::source::unresolvable),
        help(
            "A resolved source must be a directory containing setup/. \
             Corrupt archives and build steps that produced no usable layout end up here"
        )
    )]
    UnresolvableSource { path: String },

    #[error("Failed to extract archive: {path}")]
    #[diagnostic(code(revup::source::extract_failed))]
    ArchiveExtractFailed { path: String, reason: String },

    #[error("Build step failed ({status})")]
    #[diagnostic(
        code(revup::source::build_failed),
        help("Inspect the packaging script output above for the actual failure")
    )]
    BuildFailed { status: String },

    // Setup errors
    #[error("Setup run failed ({status})")]
    #[diagnostic(
        code(revup::setup::failed),
        help("Inspect the setup output above; the generated config file has already been removed")
    )]
    SetupFailed { status: String },

    #[error("Failed to spawn {command}: {reason}")]
    #[diagnostic(
        code(revup::process::spawn_failed),
        help("Check that the interpreter is on PATH, or point --php at it")
    )]
    ProcessSpawnFailed { command: String, reason: String },

    // Instance errors
    #[error("Product runtime could not be initialized at {path}")]
    #[diagnostic(code(revup::instance::bootstrap_failed))]
    BootstrapFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(revup::config::not_found))]
    ConfigFileNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(revup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Configuration value for '{key}' is not a scalar")]
    #[diagnostic(
        code(revup::config::non_scalar),
        help("Setup config entries must be flat key: value pairs")
    )]
    ConfigValueNotScalar { key: String },

    #[error("Invalid KEY=VALUE argument: {arg}")]
    #[diagnostic(
        code(revup::cli::invalid_key_value),
        help("Expected the form KEY=VALUE, e.g. --set database_type=mysql or --move core=/var/www/core")
    )]
    InvalidKeyValue { arg: String },

    #[error("Failed to write setup config: {path}")]
    #[diagnostic(code(revup::config::write_failed))]
    ConfigWriteFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to copy {from} to {to}")]
    #[diagnostic(code(revup::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(revup::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RevupError {
    fn from(err: std::io::Error) -> Self {
        RevupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RevupError {
    fn from(err: serde_yaml::Error) -> Self {
        RevupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RevupError>;
