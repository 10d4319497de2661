//! Unsigned record drafts produced when creating, editing or deleting counters
//!
//! The core never publishes anything itself. Drafts describe the exact record
//! shape other components must publish so that the normalizer can read it back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Tag, Visibility, KIND_COUNTER, KIND_DELETION};
use crate::error::{CounterError, CounterResult};
use crate::utils::time::{derive_type, parse_iso_date};
use crate::validation::{is_iso_date_shape, title_len, MAX_TITLE_LEN, MIN_TITLE_LEN};

/// User input for a new or edited counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterForm {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub visibility: Visibility,
}

impl CounterForm {
    pub fn new(title: impl Into<String>, date: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            visibility,
        }
    }

    /// Check the form and return the parsed date
    pub fn validate(&self) -> CounterResult<NaiveDate> {
        if self.title.trim().is_empty() {
            return Err(CounterError::InvalidForm("Title is required".to_string()));
        }
        let len = title_len(&self.title);
        if len > MAX_TITLE_LEN {
            return Err(CounterError::InvalidForm(format!(
                "Title must be {} characters or less",
                MAX_TITLE_LEN
            )));
        }
        if len < MIN_TITLE_LEN {
            return Err(CounterError::InvalidForm(format!(
                "Title must be at least {} characters",
                MIN_TITLE_LEN
            )));
        }
        if self.date.is_empty() {
            return Err(CounterError::InvalidForm("Date is required".to_string()));
        }
        if !is_iso_date_shape(&self.date) {
            return Err(CounterError::InvalidForm(format!(
                "Invalid date format: {}",
                self.date
            )));
        }
        parse_iso_date(&self.date)
            .ok_or_else(|| CounterError::InvalidForm(format!("Invalid date format: {}", self.date)))
    }
}

/// A record ready to be signed and published by the transport layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub kind: u32,
    pub content: String,
    pub tags: Vec<Tag>,
    pub created_at: u64,
}

impl RecordDraft {
    /// Counter record for a validated form.
    ///
    /// The `type` tag is always derived from the date relative to `today`.
    pub fn counter(form: &CounterForm, today: NaiveDate, now: u64) -> CounterResult<Self> {
        let date = form.validate()?;
        let category: Category = derive_type(date, today);

        Ok(Self {
            kind: KIND_COUNTER,
            content: String::new(),
            tags: vec![
                Tag::new("type", category.as_str()),
                Tag::new("title", form.title.as_str()),
                Tag::new("date", form.date.as_str()),
                Tag::new("visibility", form.visibility.as_str()),
            ],
            created_at: now,
        })
    }

    /// Deletion marker referencing a counter record
    pub fn deletion(counter_id: &str, now: u64) -> Self {
        Self {
            kind: KIND_DELETION,
            content: "Deleted counter".to_string(),
            tags: vec![Tag::new("a", format!("{}:{}", KIND_COUNTER, counter_id))],
            created_at: now,
        }
    }
}
