//! Optional per-package display-name overrides.
//!
//! The override document lives at `<lang dir>/<package name>/<language>.json`
//! and carries the substitute title under the `"PluginName"` key.  Any
//! failure along the way (missing file, malformed JSON, absent key) is a
//! plain `None` — the caller falls back to the decoded name.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the package root holding override documents.
pub const LANG_DIR: &str = "lang";

#[derive(Debug, Deserialize)]
struct OverrideDoc {
    #[serde(rename = "PluginName", default)]
    plugin_name: Option<String>,
}

/// Look up an override title for `package` in `language`.
pub fn lookup(lang_dir: &Path, language: &str, package: &str) -> Option<String> {
    let path = lang_dir.join(package).join(format!("{language}.json"));
    let text = fs::read_to_string(path).ok()?;
    let doc: OverrideDoc = serde_json::from_str(&text).ok()?;
    doc.plugin_name
}

/// Bind a lang directory and language tag into the pipeline's injected
/// lookup shape.
pub fn json_override(lang_dir: PathBuf, language: String) -> impl Fn(&str) -> Option<String> {
    move |package| lookup(&lang_dir, &language, package)
}
