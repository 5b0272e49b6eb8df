//! Display-order resolver: merges the user's pinned preference list with the
//! scanned baseline into one total order.

use crate::scan::Candidate;
use tracing::debug;

/// Produce the final display order.
///
/// `pool` is the scanner's lexicographic baseline.  Each preference
/// identifier, in list order, pulls the first matching candidate (by bare
/// name) to the front; everything unmatched keeps its baseline order behind
/// the pinned prefix.  Identifiers with no matching candidate are skipped
/// silently; duplicate identifiers only act once (the candidate is already
/// moved).  An empty preference list is the identity.
///
/// Output always contains every input candidate exactly once.
pub fn resolve(prefs: &[String], mut pool: Vec<Candidate>) -> Vec<Candidate> {
    if prefs.is_empty() {
        return pool;
    }

    let mut ordered = Vec::with_capacity(pool.len());
    for want in prefs {
        match pool.iter().position(|c| c.bare_name() == *want) {
            Some(i) => ordered.push(pool.remove(i)),
            None => debug!(name = %want, "preference entry matches no installed package"),
        }
    }
    ordered.append(&mut pool);
    ordered
}
