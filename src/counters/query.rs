//! Read operations

use crate::error::{CounterError, CounterResult};
use crate::normalize::try_normalize;
use crate::reconcile::{assemble, compute_deleted_ids};
use crate::source::RecordSource;
use crate::types::{Counter, RecordFilter};

use super::CounterService;

/// Fetch deletion markers and counter records, then assemble current counters
pub fn list_counters<S: RecordSource>(
    svc: &CounterService<S>,
    author: Option<&str>,
    require_public: bool,
) -> CounterResult<Vec<Counter>> {
    let limit = svc.config.fetch_limit;

    let markers = svc.source.fetch(&RecordFilter::deletions(author, limit))?;
    tracing::debug!(count = markers.len(), "Fetched deletion markers");

    let records = svc.source.fetch(&RecordFilter::counters(author, limit))?;
    tracing::debug!(count = records.len(), "Fetched counter records");

    Ok(assemble(&records, &markers, author, require_public))
}

/// Look up a single counter by slug, using the newest record with that id
pub fn get_counter<S: RecordSource>(svc: &CounterService<S>, slug: &str) -> CounterResult<Counter> {
    let records = svc.source.fetch(&RecordFilter::by_id(slug))?;

    let latest = records
        .iter()
        .max_by_key(|r| r.created_at)
        .ok_or_else(|| CounterError::NotFound(slug.to_string()))?;

    let markers = svc.source.fetch(&RecordFilter::deletions(
        Some(latest.pubkey.as_str()),
        svc.config.fetch_limit,
    ))?;
    if compute_deleted_ids(&markers).contains(slug) {
        tracing::debug!(slug, "Counter has been deleted");
        return Err(CounterError::NotFound(slug.to_string()));
    }

    try_normalize(latest, false).map_err(|reason| CounterError::InvalidRecord(reason.to_string()))
}
