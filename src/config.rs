//! Install profile loading
//!
//! A profile is a small YAML document carrying the setup configuration map
//! and, optionally, folder destinations:
//!
//! ```yaml
//! config:
//!   database_type: mysql
//!   database_server: localhost
//!   https: 0
//! destinations:
//!   core: /var/www/shared/core
//! ```
//!
//! Config values must be flat scalars; they pass through to the setup
//! program verbatim, so their meaning is the product's business.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RevupError, Result};
use crate::path_utils;

/// Declarative install profile loaded from `--config-file`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallProfile {
    /// Setup configuration entries, written into the transient config file
    #[serde(default)]
    config: IndexMap<String, serde_yaml::Value>,

    /// Folders to relocate: folder name inside the source -> target path
    #[serde(default)]
    pub destinations: IndexMap<String, PathBuf>,
}

impl InstallProfile {
    /// Load a profile from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RevupError::ConfigFileNotFound {
                path: path_utils::display_path(path),
            });
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| RevupError::ConfigParseFailed {
                path: path_utils::display_path(path),
                reason: e.to_string(),
            })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| RevupError::ConfigParseFailed {
            path: path_utils::display_path(path),
            reason: e.to_string(),
        })
    }

    /// The config entries as strings, in declaration order.
    pub fn config_map(&self) -> Result<IndexMap<String, String>> {
        self.config
            .iter()
            .map(|(key, value)| scalar_to_string(key, value).map(|v| (key.clone(), v)))
            .collect()
    }
}

fn scalar_to_string(key: &str, value: &serde_yaml::Value) -> Result<String> {
    match value {
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::String(s) => Ok(s.clone()),
        _ => Err(RevupError::ConfigValueNotScalar {
            key: key.to_string(),
        }),
    }
}
