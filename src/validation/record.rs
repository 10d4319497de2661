//! Lexical checks on raw counter records

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::RawRecord;

/// Shortest accepted title, in characters
pub const MIN_TITLE_LEN: usize = 2;

/// Longest accepted title, in characters
pub const MAX_TITLE_LEN: usize = 100;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex must compile")
});

/// True when `value` looks like `DDDD-DD-DD`. No calendar check.
pub fn is_iso_date_shape(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

/// Title length in UTF-16 code units, the unit other clients measure in
pub fn title_len(title: &str) -> usize {
    title.encode_utf16().count()
}

/// True when the title length is within `[MIN_TITLE_LEN, MAX_TITLE_LEN]`
pub fn title_in_bounds(title: &str) -> bool {
    (MIN_TITLE_LEN..=MAX_TITLE_LEN).contains(&title_len(title))
}

/// Pre-filter for counter records.
///
/// Requires a `type` tag of `since`/`until`, a non-empty `title` tag and a
/// `date` tag of the right shape. With `require_public`, a `visibility` tag of
/// `public` is required as well. Passing here does not guarantee the record
/// normalizes.
pub fn is_valid_counter_record(record: &RawRecord, require_public: bool) -> bool {
    let has_type = record.any_tag("type", |v| v == "since" || v == "until");
    let has_title = record.any_tag("title", |v| !v.is_empty());
    let has_date = record.any_tag("date", is_iso_date_shape);

    if !(has_type && has_title && has_date) {
        return false;
    }

    if require_public {
        return record.any_tag("visibility", |v| v == "public");
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KIND_COUNTER;

    fn counter_record() -> RawRecord {
        RawRecord::new("abc", "pk", KIND_COUNTER, 1000)
            .with_tag("type", "since")
            .with_tag("title", "Quit smoking")
            .with_tag("date", "2023-01-01")
    }

    #[test]
    fn test_title_length_counts_utf16_units() {
        assert_eq!(title_len("ab"), 2);
        assert_eq!(title_len("é"), 1);
        assert_eq!(title_len("🎉"), 2);

        assert!(title_in_bounds("🎉"));
        assert!(!title_in_bounds("é"));
        assert!(!title_in_bounds(&"🎉".repeat(51)));
        assert!(title_in_bounds(&"🎉".repeat(50)));
    }

    #[test]
    fn test_valid_record() {
        assert!(is_valid_counter_record(&counter_record(), false));
    }

    #[test]
    fn test_each_core_tag_is_required() {
        for missing in ["type", "title", "date"] {
            let mut record = counter_record();
            record.tags.retain(|t| !t.is(missing));
            assert!(
                !is_valid_counter_record(&record, false),
                "record without {} should be rejected",
                missing
            );
        }
    }

    #[test]
    fn test_bad_values_rejected() {
        let record = counter_record().with_tags(vec![]);
        assert!(!is_valid_counter_record(&record, false));

        let bad_type = RawRecord::new("a", "pk", KIND_COUNTER, 1)
            .with_tag("type", "during")
            .with_tag("title", "Title")
            .with_tag("date", "2023-01-01");
        assert!(!is_valid_counter_record(&bad_type, false));

        let empty_title = RawRecord::new("a", "pk", KIND_COUNTER, 1)
            .with_tag("type", "since")
            .with_tag("title", "")
            .with_tag("date", "2023-01-01");
        assert!(!is_valid_counter_record(&empty_title, false));

        let bad_date = RawRecord::new("a", "pk", KIND_COUNTER, 1)
            .with_tag("type", "since")
            .with_tag("title", "Title")
            .with_tag("date", "2023-1-01");
        assert!(!is_valid_counter_record(&bad_date, false));
    }

    #[test]
    fn test_any_matching_tag_counts() {
        let record = RawRecord::new("a", "pk", KIND_COUNTER, 1)
            .with_tag("type", "bogus")
            .with_tag("type", "until")
            .with_tag("title", "Title")
            .with_tag("date", "2099-01-01");
        assert!(is_valid_counter_record(&record, false));
    }

    #[test]
    fn test_require_public() {
        assert!(!is_valid_counter_record(&counter_record(), true));

        let public = counter_record().with_tag("visibility", "public");
        assert!(is_valid_counter_record(&public, true));

        let private = counter_record().with_tag("visibility", "private");
        assert!(!is_valid_counter_record(&private, true));
        assert!(is_valid_counter_record(&private, false));
    }

    #[test]
    fn test_date_shape_is_lexical_only() {
        assert!(is_iso_date_shape("2023-02-30"));
        assert!(is_iso_date_shape("0000-99-99"));
        assert!(!is_iso_date_shape("2023-01-01T00:00:00"));
        assert!(!is_iso_date_shape("2023-01-01\n"));
        assert!(!is_iso_date_shape("２０２３-01-01"));
        assert!(!is_iso_date_shape(""));
    }

    #[test]
    fn test_title_bounds() {
        assert!(!title_in_bounds("a"));
        assert!(title_in_bounds("ab"));
        assert!(title_in_bounds(&"x".repeat(100)));
        assert!(!title_in_bounds(&"x".repeat(101)));
        assert!(title_in_bounds("日本"));
    }
}
