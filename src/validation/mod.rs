//! Counter record validation
//!
//! This module provides the cheap pre-filter applied before normalization and
//! the field-level checks shared with the normalizer and form handling.

mod record;

pub use record::{
    is_iso_date_shape, is_valid_counter_record, title_in_bounds, title_len, MAX_TITLE_LEN, MIN_TITLE_LEN,
};
