//! Date and timestamp utilities
//!
//! All comparisons are date-only in UTC. The current day is always passed in
//! explicitly; only [`today`] and [`current_timestamp`] read the clock.

use chrono::{NaiveDate, Utc};

use crate::types::Category;

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Today's date as `YYYY-MM-DD`
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` string into a real calendar day
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Classify a date relative to `today`: on or before is `since`, after is `until`
pub fn derive_type(date: NaiveDate, today: NaiveDate) -> Category {
    if date <= today {
        Category::Since
    } else {
        Category::Until
    }
}

/// [`derive_type`] against the system clock
pub fn derive_type_today(date: NaiveDate) -> Category {
    derive_type(date, today())
}

/// Whole days elapsed since `date` (for `since`) or remaining until it (for `until`)
pub fn days_diff(date: NaiveDate, category: Category, today: NaiveDate) -> i64 {
    match category {
        Category::Since => (today - date).num_days(),
        Category::Until => (date - today).num_days(),
    }
}

pub fn is_date_in_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Long form date, e.g. "June 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a day count for display
pub fn format_duration(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 day".to_string(),
        -1 => "1 day ago".to_string(),
        d if d > 0 => format!("{} days", d),
        d => format!("{} days ago", d.abs()),
    }
}
