//! Record query filters

use serde::{Deserialize, Serialize};

use super::{RawRecord, KIND_COUNTER, KIND_DELETION};

/// Default cap on records returned per query
pub const DEFAULT_FETCH_LIMIT: usize = 100;

/// Query for a record source. Empty lists mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl RecordFilter {
    /// Counter records, optionally for one author
    pub fn counters(author: Option<&str>, limit: usize) -> Self {
        Self {
            kinds: vec![KIND_COUNTER],
            authors: author.map(|a| vec![a.to_string()]).unwrap_or_default(),
            ids: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Deletion markers, optionally for one author
    pub fn deletions(author: Option<&str>, limit: usize) -> Self {
        Self {
            kinds: vec![KIND_DELETION],
            ..Self::counters(author, limit)
        }
    }

    /// A single counter record by id
    pub fn by_id(id: &str) -> Self {
        Self {
            kinds: vec![KIND_COUNTER],
            ids: vec![id.to_string()],
            ..Default::default()
        }
    }

    /// Check whether a record satisfies the kind, author and id constraints
    pub fn matches(&self, record: &RawRecord) -> bool {
        (self.kinds.is_empty() || self.kinds.contains(&record.kind))
            && (self.authors.is_empty() || self.authors.iter().any(|a| a == &record.pubkey))
            && (self.ids.is_empty() || self.ids.iter().any(|id| id == &record.id))
    }

    /// Select matching records, newest first, capped at `limit`
    pub fn apply<'a, I>(&self, records: I) -> Vec<RawRecord>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut matched: Vec<RawRecord> = records
            .into_iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }
        matched
    }
}
