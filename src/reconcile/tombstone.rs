//! Tombstone reconciliation

use std::collections::HashSet;

use crate::types::{RawRecord, KIND_COUNTER, KIND_DELETION};

/// Extract the counter id from a `"30078:<id>"` reference.
///
/// References with any other shape, including three-part addressable
/// references, are not counter references.
pub fn parse_counter_reference(reference: &str) -> Option<&str> {
    let mut parts = reference.split(':');
    let kind = parts.next()?;
    let id = parts.next()?;
    if parts.next().is_some() || kind != KIND_COUNTER.to_string() || id.is_empty() {
        return None;
    }
    Some(id)
}

/// Collect the ids of counter records referenced by deletion markers
pub fn compute_deleted_ids<'a, I>(markers: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut deleted = HashSet::new();

    for marker in markers {
        if marker.kind != KIND_DELETION {
            tracing::debug!(id = %marker.id, kind = marker.kind, "Ignoring non-deletion marker");
            continue;
        }

        for reference in marker.tags_named("a").filter_map(|t| t.value()) {
            if let Some(id) = parse_counter_reference(reference) {
                deleted.insert(id.to_string());
            }
        }
    }

    deleted
}
