//! Preference list loader — one bare package identifier per line.

use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration directory for the menu's own state.
pub const DEFAULT_CONFIG_DIR: &str = "/config/ovlshelf";
/// Preference file name inside the configuration directory.
pub const SORT_FILE: &str = "sort.cfg";

/// Default preference file location.
pub fn default_path() -> PathBuf {
    Path::new(DEFAULT_CONFIG_DIR).join(SORT_FILE)
}

/// Load the ordered preference list from `path`.
///
/// An absent or unreadable file means "no preference recorded" and yields an
/// empty list.  Blank lines are dropped; they can never match a candidate.
pub fn load(path: &Path) -> Vec<String> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
