pub mod lang;
pub mod listing;
pub mod nro;
pub mod order;
pub mod prefs;
pub mod scan;

pub use listing::{build, Entry, Listing};
pub use nro::{decode, DecodeError, PackageMetadata};
pub use scan::{scan, Candidate, ScanConfig};
