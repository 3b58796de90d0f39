//! Transient setup config generation
//!
//! The setup program takes its fresh-install answers from an XML document:
//! one root element, one child element per configuration key, written to
//! the current working directory and removed again once setup has run.
//! Values pass through as element text; supplying values that survive the
//! format is the caller's job, there is no CDATA or attribute support.

use indexmap::IndexMap;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{RevupError, Result};
use crate::path_utils;

/// File name of the transient config artifact.
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Root element of the generated document.
const ROOT_ELEMENT: &str = "modx";

/// Write the setup config into the current working directory and return
/// its absolute path.
pub fn build_config_file(config: &IndexMap<String, String>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    write_config_file(&cwd, config)
}

/// Write the setup config as `<dir>/config.xml`.
pub fn write_config_file(dir: &Path, config: &IndexMap<String, String>) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    let document = render(config).map_err(|e| write_error(&path, e))?;
    std::fs::write(&path, document).map_err(|e| write_error(&path, e))?;
    path_utils::absolutize(&path)
}

/// Best-effort removal of the transient artifact; the setup outcome does
/// not gate cleanup.
pub fn remove_config_file(path: &Path) {
    let _ = std::fs::remove_file(path);
}

/// Pretty-printed document with one child element per config entry.
fn render(config: &IndexMap<String, String>) -> quick_xml::Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer
        .create_element(ROOT_ELEMENT)
        .write_inner_content(|w| {
            for (key, value) in config {
                w.create_element(key.as_str())
                    .write_text_content(BytesText::new(value))?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;

    let mut bytes = writer.into_inner().into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_error(path: &Path, reason: impl ToString) -> RevupError {
    RevupError::ConfigWriteFailed {
        path: path_utils::display_path(path),
        reason: reason.to_string(),
    }
}
