//! NostrCount core
//!
//! Reconstructs "counter" milestones (days since / days until a date) from an
//! unordered, untrusted, append-only stream of Nostr records.
//!
//! # Features
//!
//! - **Silent-skip reconciliation**: Malformed, deleted and duplicate records are dropped, never fatal
//! - **Multi-schema tolerance**: Canonical tags, alternate tags and JSON content
//! - **Tombstones**: Kind 5 deletion markers remove the counters they reference
//! - **Deterministic output**: Newest first, ties broken by id
//!
//! # Modules
//!
//! - `types`: Record, counter, draft, filter and profile types
//! - `validation`: Lexical pre-filter for counter records
//! - `normalize`: Extractor chain and field validation
//! - `reconcile`: Tombstone reconciliation and counter assembly
//! - `source`: Record source/sink traits with in-memory and JSON-lines implementations
//! - `counters`: Service tying a source to the core
//! - `utils`: Date helpers, including the type deriver
//!
//! # Example
//!
//! ```
//! use nostr_count::{assemble, RawRecord, KIND_COUNTER};
//!
//! let record = RawRecord::new("abc", "pk", KIND_COUNTER, 1000)
//!     .with_tag("type", "since")
//!     .with_tag("title", "Quit smoking")
//!     .with_tag("date", "2023-01-01")
//!     .with_tag("visibility", "public");
//!
//! let counters = assemble(&[record], &[], None, false);
//! assert_eq!(counters[0].slug, "abc");
//! ```

pub mod config;
pub mod counters;
pub mod error;
pub mod normalize;
pub mod reconcile;
pub mod source;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::ClientConfig;
pub use counters::CounterService;
pub use error::{CounterError, CounterResult, SourceError, SourceResult};
pub use normalize::{normalize, try_normalize, RejectReason};
pub use reconcile::{assemble, assemble_detailed, compute_deleted_ids, Assembly, AssemblyStats};
pub use source::{JsonlSource, MemoryRelay, RecordSink, RecordSource};
pub use types::{
    Category, Counter, CounterForm, RawRecord, RecordDraft, RecordFilter, Tag, UserProfile,
    Visibility, KIND_COUNTER, KIND_DELETION, KIND_METADATA, KIND_NOTE,
};
pub use utils::time::{derive_type, derive_type_today};
pub use validation::is_valid_counter_record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
