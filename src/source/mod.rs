//! Record sources and sinks
//!
//! The transport layer lives outside this crate. These traits are the seam it
//! plugs into; the implementations here serve tests and local tooling:
//! - `MemoryRelay`: In-memory source and sink
//! - `JsonlSource`: Read-only source over a JSON-lines record cache

mod jsonl;
mod memory;

pub use jsonl::JsonlSource;
pub use memory::MemoryRelay;

use crate::error::SourceResult;
use crate::types::{RawRecord, RecordDraft, RecordFilter};

/// Something records can be queried from
pub trait RecordSource: Send + Sync {
    /// Fetch records matching `filter`, at most `filter.limit` of them
    fn fetch(&self, filter: &RecordFilter) -> SourceResult<Vec<RawRecord>>;
}

/// Something records can be published to
pub trait RecordSink: Send + Sync {
    /// Sign and publish a draft on behalf of `author`, returning the stored record
    fn publish(&self, author: &str, draft: RecordDraft) -> SourceResult<RawRecord>;
}
