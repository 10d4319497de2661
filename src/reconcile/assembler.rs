//! Counter assembly
//!
//! Pure and stateless: the output depends only on the records passed in.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::normalize::normalize;
use crate::types::{Counter, RawRecord};
use crate::validation::is_valid_counter_record;

use super::tombstone::compute_deleted_ids;

/// Counts of what happened to each record during assembly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    /// Records handed in
    pub received: usize,
    /// Records by other authors than the filter
    pub other_authors: usize,
    /// Records referenced by a deletion marker
    pub deleted: usize,
    /// Repeated ids (same record from several relays)
    pub duplicates: usize,
    /// Records rejected by validation or normalization
    pub invalid: usize,
    /// Counters produced
    pub accepted: usize,
}

/// Result of an assembly pass
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub counters: Vec<Counter>,
    pub stats: AssemblyStats,
}

/// Assemble counters and report per-step counts
pub fn assemble_detailed(
    raw_records: &[RawRecord],
    deletion_markers: &[RawRecord],
    author_filter: Option<&str>,
    require_public: bool,
) -> Assembly {
    let deleted_ids = compute_deleted_ids(deletion_markers);
    let mut stats = AssemblyStats {
        received: raw_records.len(),
        ..Default::default()
    };

    let mut seen: HashSet<&str> = HashSet::with_capacity(raw_records.len());
    let mut candidates: Vec<&RawRecord> = Vec::with_capacity(raw_records.len());

    for record in raw_records {
        if author_filter.is_some_and(|author| author != record.pubkey) {
            stats.other_authors += 1;
            continue;
        }
        if deleted_ids.contains(&record.id) {
            tracing::debug!(id = %record.id, "Skipping deleted record");
            stats.deleted += 1;
            continue;
        }
        if !seen.insert(record.id.as_str()) {
            stats.duplicates += 1;
            continue;
        }
        candidates.push(record);
    }

    let mut counters: Vec<Counter> = candidates
        .par_iter()
        .filter(|record| {
            let valid = is_valid_counter_record(record, require_public);
            if !valid {
                tracing::debug!(id = %record.id, "Skipping invalid counter record");
            }
            valid
        })
        .filter_map(|record| normalize(record, require_public))
        .collect();

    stats.invalid = candidates.len() - counters.len();
    stats.accepted = counters.len();

    // Newest first; id breaks ties so identical input gives identical output
    counters.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    tracing::info!(
        received = stats.received,
        deleted = stats.deleted,
        duplicates = stats.duplicates,
        invalid = stats.invalid,
        accepted = stats.accepted,
        "Assembled counters"
    );

    Assembly { counters, stats }
}

/// Turn raw records and deletion markers into current counters, newest first.
///
/// Never fails: deleted, malformed and duplicate records are dropped and an
/// empty or fully invalid input yields an empty vector.
pub fn assemble(
    raw_records: &[RawRecord],
    deletion_markers: &[RawRecord],
    author_filter: Option<&str>,
    require_public: bool,
) -> Vec<Counter> {
    assemble_detailed(raw_records, deletion_markers, author_filter, require_public).counters
}
