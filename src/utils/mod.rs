//! Utility functions and helpers
//!
//! This module contains date and timestamp helpers, including the type deriver.

pub mod time;

pub use time::{
    current_timestamp, days_diff, derive_type, derive_type_today, format_date, format_duration,
    is_date_in_future, parse_iso_date, today, today_iso,
};
