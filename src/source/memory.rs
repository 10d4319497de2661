//! In-memory relay

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use super::{RecordSink, RecordSource};
use crate::error::SourceResult;
use crate::types::{RawRecord, RecordDraft, RecordFilter};

/// Thread-safe in-memory record store acting as both source and sink.
///
/// Published records get sequential 64-character hex ids. No signing happens.
#[derive(Debug, Default)]
pub struct MemoryRelay {
    records: RwLock<Vec<RawRecord>>,
    next_id: AtomicU64,
}

impl MemoryRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a relay pre-loaded with records
    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(0),
        }
    }

    /// Store a record as-is
    pub fn insert(&self, record: RawRecord) {
        self.records.write().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn next_record_id(&self) -> String {
        let seq = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{:064x}", seq)
    }
}

impl RecordSource for MemoryRelay {
    fn fetch(&self, filter: &RecordFilter) -> SourceResult<Vec<RawRecord>> {
        let records = self.records.read();
        Ok(filter.apply(records.iter()))
    }
}

impl RecordSink for MemoryRelay {
    fn publish(&self, author: &str, draft: RecordDraft) -> SourceResult<RawRecord> {
        let record = RawRecord {
            id: self.next_record_id(),
            pubkey: author.to_string(),
            kind: draft.kind,
            created_at: draft.created_at,
            tags: draft.tags,
            content: draft.content,
            sig: None,
        };
        self.insert(record.clone());
        tracing::debug!(id = %record.id, kind = record.kind, "Published record");
        Ok(record)
    }
}
