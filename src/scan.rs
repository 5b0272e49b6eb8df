//! Package scanner: non-recursive directory listing with extension filter
//! and reserved self-entry exclusion.

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Default directory scanned for overlay packages.
pub const DEFAULT_ROOT: &str = "/switch/.overlays";
/// Package file extension, without the dot.
pub const PACKAGE_EXTENSION: &str = "ovl";
/// The menu's own container file; never listed, whatever its extension.
pub const RESERVED_NAME: &str = "ovlmenu.ovl";

/// Scan policy.  The defaults match the installed layout; tests override
/// `root` to point at a scratch directory.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extension: String,
    pub reserved: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::at(DEFAULT_ROOT)
    }
}

impl ScanConfig {
    /// Default policy rooted at `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: PACKAGE_EXTENSION.to_owned(),
            reserved: RESERVED_NAME.to_owned(),
        }
    }
}

/// One discovered package file.  Created per scan, holds nothing long-lived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
}

impl Candidate {
    /// Filename minus the package extension — the join key against the
    /// preference list.
    pub fn bare_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or(OsStr::new(""))
    }
}

/// List candidate packages under `cfg.root`, sorted lexicographically by
/// filename (the deterministic baseline fed to the order resolver).
///
/// A missing or unreadable directory yields an empty vec — no overlays
/// installed is a normal, displayable state, not a failure.
pub fn scan(cfg: &ScanConfig) -> Vec<Candidate> {
    let entries = match fs::read_dir(&cfg.root) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(root = %cfg.root.display(), %err, "package directory not readable");
            return Vec::new();
        }
    };

    let mut found: Vec<Candidate> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.file_name() != Some(OsStr::new(&cfg.reserved)))
        .filter(|path| path.extension() == Some(OsStr::new(&cfg.extension)))
        .map(|path| Candidate { path })
        .collect();

    found.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    found
}
