//! Data types for NostrCount
//!
//! This module contains the record model consumed from the network and the
//! counter model derived from it.

mod counter;
mod draft;
mod filter;
mod profile;
mod record;

pub use counter::{Category, Counter, Visibility};
pub use draft::{CounterForm, RecordDraft};
pub use filter::{RecordFilter, DEFAULT_FETCH_LIMIT};
pub use profile::{parse_nip05, UserProfile};
pub use record::{RawRecord, Tag};

/// Kind of a profile metadata record
pub const KIND_METADATA: u32 = 0;

/// Kind of a free-text note
pub const KIND_NOTE: u32 = 1;

/// Kind of a deletion marker
pub const KIND_DELETION: u32 = 5;

/// Kind of a counter record
pub const KIND_COUNTER: u32 = 30078;

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u64) -> bool {
    *val == 0
}
