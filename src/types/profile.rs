//! Author profile metadata (kind 0 records)

use serde::{Deserialize, Serialize};

use super::{RawRecord, KIND_METADATA};

/// Profile fields published by an author in a metadata record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_deserializing)]
    pub pubkey: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nip05: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lud16: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lud06: Option<String>,
}

impl UserProfile {
    /// Read a profile from a metadata record; `None` for other kinds or bad JSON
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        if record.kind != KIND_METADATA {
            return None;
        }
        match serde_json::from_str::<UserProfile>(&record.content) {
            Ok(mut profile) => {
                profile.pubkey = record.pubkey.clone();
                Some(profile)
            }
            Err(e) => {
                tracing::debug!(id = %record.id, error = %e, "Unreadable profile content");
                None
            }
        }
    }

    /// Lightning address for zaps, lud16 preferred over lud06
    pub fn lightning_address(&self) -> Option<&str> {
        self.lud16.as_deref().or(self.lud06.as_deref())
    }

    /// Best name to show for the author
    pub fn display(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.pubkey)
    }
}

/// Split a NIP-05 identifier into `(name, domain)`
pub fn parse_nip05(nip05: &str) -> Option<(&str, &str)> {
    let (name, rest) = nip05.split_once('@')?;
    let domain = rest.split('@').next().unwrap_or(rest);
    Some((name, domain))
}
