//! Listing pipeline — scan, decode, order, emit.
//!
//! `build` runs the whole chain: the scanner produces the candidate
//! baseline, every candidate goes through the NRO decoder, failures are
//! dropped (counted, never fatal), and the order resolver places the
//! survivors.  An empty listing is a valid terminal state the caller
//! renders as "nothing found"; no input can make this pipeline return an
//! error or terminate the host.
//!
//! The pipeline is idempotent: two runs over unchanged storage produce
//! identical listings.

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

use crate::nro::{self, PackageMetadata};
use crate::order;
use crate::scan::{self, Candidate, ScanConfig};

/// Injected display-name override lookup; the caller has already bound the
/// language tag (see [`crate::lang::json_override`]).
pub type NameOverrideFn = dyn Fn(&str) -> Option<String>;

/// One placed listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub version: String,
}

/// Output of one pipeline run.
#[derive(Debug, Default)]
pub struct Listing {
    /// Final display order; no two entries share a path.
    pub entries: Vec<Entry>,
    /// Candidates dropped because their metadata did not decode.
    pub dropped: usize,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the ordered listing for `cfg.root` under the given preference list.
pub fn build(
    cfg: &ScanConfig,
    prefs: &[String],
    name_override: Option<&NameOverrideFn>,
) -> Listing {
    let mut survivors: Vec<Candidate> = Vec::new();
    let mut meta_by_path: HashMap<PathBuf, PackageMetadata> = HashMap::new();
    let mut dropped = 0usize;

    for candidate in scan::scan(cfg) {
        match nro::decode(&candidate.path) {
            Ok(meta) => {
                meta_by_path.insert(candidate.path.clone(), meta);
                survivors.push(candidate);
            }
            Err(err) => {
                warn!(path = %candidate.path.display(), %err, "dropping undecodable package");
                dropped += 1;
            }
        }
    }

    let entries = order::resolve(prefs, survivors)
        .into_iter()
        .filter_map(|candidate| {
            let meta = meta_by_path.remove(&candidate.path)?;
            let name = name_override
                .and_then(|lookup| lookup(&meta.name))
                .unwrap_or(meta.name);
            Some(Entry {
                path: candidate.path,
                name,
                version: meta.version,
            })
        })
        .collect();

    Listing { entries, dropped }
}
