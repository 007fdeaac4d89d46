//! Reference-graph closure.
//!
//! A reference map associates each document key with the ordered list of
//! references extracted from that document. `infect` propagates every
//! document's direct references into the documents that reference it, one
//! level deep.

use indexmap::IndexMap;
use tracing::debug;

/// Mapping from document key to that document's ordered reference list.
///
/// Keys iterate in insertion order, which is also the order `infect`
/// processes them in.
pub type ReferenceMap = IndexMap<String, Vec<String>>;

/// Propagate direct references one level across the map.
///
/// For every document, in map order, each reference in the document's list
/// that is itself a key in the map has that key's reference list (as it
/// currently stands) appended to the owning document's list. Only the
/// references present before the document's own list starts growing are
/// eligible to propagate, so entries appended during the same pass are not
/// re-propagated.
///
/// Propagation is deliberately single-level: if `a` references `b` and `b`
/// references `c`, one call gives `a` everything `b` lists directly, but
/// nothing `c` lists unless `c` also appears under `a`. Call again to
/// deepen. Duplicates are preserved and references to unknown keys are
/// skipped.
pub fn infect(map: &mut ReferenceMap) {
    let keys: Vec<String> = map.keys().cloned().collect();

    for key in keys {
        let snapshot = match map.get(&key) {
            Some(refs) => refs.clone(),
            None => continue,
        };
        for reference in &snapshot {
            if let Some(appended) = map.get(reference).cloned() {
                if let Some(refs) = map.get_mut(&key) {
                    refs.extend(appended);
                }
            }
        }
    }

    debug!(documents = map.len(), "reference propagation pass complete");
}
