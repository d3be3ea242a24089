//! Content-level change detection between two histories
//!
//! Only activity payloads are compared, as sets: dates, capture times,
//! ordering and duplicate payloads are invisible. A reordering or a moved
//! payload is therefore not reported; that is acceptable for deciding
//! whether a store needs rewriting.

use std::collections::HashSet;
use std::hash::Hash;

use duosync_domain::DatabaseEntry;

/// True when the set of progressions or the set of streaks differs.
pub fn content_changed(before: &[DatabaseEntry], after: &[DatabaseEntry]) -> bool {
    payload_set(before, |entry| &entry.progression) != payload_set(after, |entry| &entry.progression)
        || payload_set(before, |entry| &entry.streak_information)
            != payload_set(after, |entry| &entry.streak_information)
}

fn payload_set<'a, T, F>(entries: &'a [DatabaseEntry], pick: F) -> HashSet<&'a T>
where
    T: Eq + Hash,
    F: Fn(&'a DatabaseEntry) -> &'a T,
{
    entries.iter().map(pick).collect()
}
