//! Reconciliation of the record stream into current counters
//!
//! This module provides the read path from raw network records to counters:
//! - `compute_deleted_ids`: Collects ids superseded by deletion markers
//! - `assemble`: Drops deleted, malformed and duplicate records, then orders the rest
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌──────────────┐    ┌───────────┐    ┌───────────┐
//! │ deletion markers │───►│ deleted ids  │    │           │    │ sort      │
//! └──────────────────┘    └──────┬───────┘    │ validate  │    │ newest    │
//! ┌──────────────────┐           ▼            │ normalize │───►│ first     │
//! │ raw records      │───► drop deleted ─────►│           │    │           │
//! └──────────────────┘                        └───────────┘    └───────────┘
//! ```
//!
//! Every step is a silent exclusion: one bad record never aborts a batch.

mod assembler;
mod tombstone;

pub use assembler::{assemble, assemble_detailed, Assembly, AssemblyStats};
pub use tombstone::{compute_deleted_ids, parse_counter_reference};
