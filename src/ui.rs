//! Styled terminal output for install steps

use console::Style;
use std::path::Path;

use crate::path_utils;

/// Announce a pipeline step.
pub fn step(message: &str) {
    println!("{} {}", Style::new().cyan().bold().apply_to("==>"), message);
}

/// Indented label/value line under a step.
pub fn detail(label: &str, value: &str) {
    println!("    {} {}", Style::new().bold().apply_to(label), value);
}

/// Indented label/path line under a step.
pub fn path_detail(label: &str, path: &Path) {
    detail(label, &path_utils::display_path(path));
}

/// Final success line.
pub fn success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("OK"), message);
}
