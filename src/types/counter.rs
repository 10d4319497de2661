//! Counter types: the normalized domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time::{days_diff, format_duration, parse_iso_date};

/// Whether a counter measures time since or until its date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Since,
    Until,
}

impl Category {
    /// Parse an exact tag value (`since` or `until`)
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            "since" => Some(Category::Since),
            "until" => Some(Category::Until),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Since => "since",
            Category::Until => "until",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared access intent of a counter (advisory only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Parse an exact tag value (`public` or `private`)
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A counter reconstructed from a single valid record
///
/// Counters have no identity of their own: `id` and `slug` are the id of the
/// record they were derived from. Edits produce a new record and therefore a
/// new counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: String,
    pub title: String,
    /// Lexically checked `YYYY-MM-DD`; not guaranteed to be a real calendar day
    pub date: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub visibility: Visibility,
    pub pubkey: String,
    #[serde(rename = "createdAt")]
    pub created_at: u64,
    pub slug: String,
}

impl Counter {
    /// The date as a calendar day, if it is one
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }

    /// Whole days since (or until) the counter's date, relative to `today`
    pub fn days(&self, today: NaiveDate) -> Option<i64> {
        self.parsed_date()
            .map(|date| days_diff(date, self.category, today))
    }

    /// Human readable duration, e.g. "12 days" or "Today"
    pub fn display(&self, today: NaiveDate) -> Option<String> {
        self.days(today).map(format_duration)
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}
