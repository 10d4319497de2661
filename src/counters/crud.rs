//! Write operations
//!
//! Records are never updated in place. An edit publishes a new counter record
//! with a new id; the previous record is left untouched.

use crate::error::{CounterError, CounterResult};
use crate::normalize::try_normalize;
use crate::source::{RecordSink, RecordSource};
use crate::types::{Counter, CounterForm, RawRecord, RecordDraft};

use super::CounterService;

/// Publish a new counter record and read it back
pub fn create_counter<S: RecordSource + RecordSink>(
    svc: &CounterService<S>,
    author: &str,
    form: &CounterForm,
) -> CounterResult<Counter> {
    let draft = RecordDraft::counter(form, svc.today(), svc.now())?;
    let record = svc.source.publish(author, draft)?;

    let counter = try_normalize(&record, false).map_err(|reason| {
        CounterError::InvalidRecord(format!("Failed to parse created counter: {}", reason))
    })?;

    tracing::info!(id = %counter.id, title = %counter.title, "Created counter");
    Ok(counter)
}

/// Publish an edited counter as a brand-new record
pub fn update_counter<S: RecordSource + RecordSink>(
    svc: &CounterService<S>,
    author: &str,
    previous: &str,
    form: &CounterForm,
) -> CounterResult<Counter> {
    let counter = create_counter(svc, author, form)?;
    tracing::info!(previous, id = %counter.id, "Published counter edit");
    Ok(counter)
}

/// Publish a deletion marker for a counter
pub fn delete_counter<S: RecordSource + RecordSink>(
    svc: &CounterService<S>,
    author: &str,
    slug: &str,
) -> CounterResult<RawRecord> {
    let marker = svc.source.publish(author, RecordDraft::deletion(slug, svc.now()))?;
    tracing::info!(slug, marker = %marker.id, "Deleted counter");
    Ok(marker)
}
