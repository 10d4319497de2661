//! Record normalization
//!
//! Turns a raw record into a [`Counter`] or rejects it. Producers are
//! uncoordinated, so fields are gathered by an ordered chain of extractors
//! (canonical tags, alternate tags, JSON content). Each extractor only fills
//! fields that are still missing, and the fallbacks only run while `type`,
//! `title` or `date` is missing.
//!
//! ```text
//! ┌───────────────┐   ┌────────────────┐   ┌──────────────┐   ┌──────────┐
//! │ canonical tags│──►│ alternate tags │──►│ JSON content │──►│ validate │──► Counter
//! └───────────────┘   └────────────────┘   └──────────────┘   └──────────┘
//! ```

mod extractors;

use thiserror::Error;

use crate::types::{Category, Counter, RawRecord, Visibility};
use crate::validation::{is_iso_date_shape, title_in_bounds, title_len};

pub use extractors::{CounterFields, Extractor, EXTRACTORS};

/// Why a record did not produce a counter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("missing title")]
    MissingTitle,

    #[error("missing date")]
    MissingDate,

    #[error("invalid type '{0}'")]
    InvalidType(String),

    #[error("invalid visibility '{0}'")]
    InvalidVisibility(String),

    #[error("invalid date format '{0}'")]
    InvalidDate(String),

    #[error("invalid title length {0}")]
    TitleLength(usize),

    #[error("counter is not public")]
    NotPublic,
}

/// Run the extractor chain over a record.
///
/// Canonical tags always apply. Later extractors are skipped once the core
/// fields are present, so a canonical record never reads its content.
pub fn extract_fields(record: &RawRecord) -> CounterFields {
    let mut fields = CounterFields::default();
    for (name, extractor) in EXTRACTORS {
        if fields.is_complete() {
            break;
        }
        extractor(record, &mut fields);
        tracing::trace!(id = %record.id, extractor = *name, ?fields, "Applied extractor");
    }
    fields
}

/// Normalize a record, reporting why it was rejected
pub fn try_normalize(record: &RawRecord, require_public: bool) -> Result<Counter, RejectReason> {
    let fields = extract_fields(record);

    let title = fields.title.ok_or(RejectReason::MissingTitle)?;
    let date = fields.date.ok_or(RejectReason::MissingDate)?;

    // Static defaults; the type is never derived from the date here
    let category = match fields.category {
        Some(value) => Category::from_tag_value(&value).ok_or(RejectReason::InvalidType(value))?,
        None => Category::Since,
    };
    let visibility = match fields.visibility {
        Some(value) => {
            Visibility::from_tag_value(&value).ok_or(RejectReason::InvalidVisibility(value))?
        }
        None => Visibility::Public,
    };

    if !is_iso_date_shape(&date) {
        return Err(RejectReason::InvalidDate(date));
    }

    if !title_in_bounds(&title) {
        return Err(RejectReason::TitleLength(title_len(&title)));
    }

    let counter = Counter {
        id: record.id.clone(),
        title,
        date,
        category,
        visibility,
        pubkey: record.pubkey.clone(),
        created_at: record.created_at,
        slug: record.id.clone(),
    };

    if require_public && !counter.is_public() {
        return Err(RejectReason::NotPublic);
    }

    Ok(counter)
}

/// Normalize a record into a counter, or `None` if it is not a valid counter
pub fn normalize(record: &RawRecord, require_public: bool) -> Option<Counter> {
    match try_normalize(record, require_public) {
        Ok(counter) => Some(counter),
        Err(reason) => {
            tracing::debug!(id = %record.id, %reason, "Skipping record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tag, KIND_COUNTER};

    fn record() -> RawRecord {
        RawRecord::new("abc", "pk", KIND_COUNTER, 1000)
    }

    fn full_record() -> RawRecord {
        record()
            .with_tag("type", "since")
            .with_tag("title", "Quit smoking")
            .with_tag("date", "2023-01-01")
            .with_tag("visibility", "public")
    }

    #[test]
    fn test_basic_accept() {
        let counter = normalize(&full_record(), false).unwrap();
        assert_eq!(
            counter,
            Counter {
                id: "abc".to_string(),
                title: "Quit smoking".to_string(),
                date: "2023-01-01".to_string(),
                category: Category::Since,
                visibility: Visibility::Public,
                pubkey: "pk".to_string(),
                created_at: 1000,
                slug: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_json_content_fallback() {
        let rec = record().with_content(r#"{"title":"X","date":"2099-01-01"}"#);
        // "X" is a single character, so the title bound rejects it
        assert_eq!(try_normalize(&rec, false), Err(RejectReason::TitleLength(1)));

        let rec = record().with_content(r#"{"title":"XY","date":"2099-01-01"}"#);
        let counter = normalize(&rec, false).unwrap();
        assert_eq!(counter.title, "XY");
        assert_eq!(counter.date, "2099-01-01");
        assert_eq!(counter.category, Category::Since);
        assert_eq!(counter.visibility, Visibility::Public);
    }

    #[test]
    fn test_alternate_tags() {
        let rec = record()
            .with_tag("d", "Sober")
            .with_tag("t", "until")
            .with_tag("date", "2030-01-01");
        let counter = normalize(&rec, false).unwrap();
        assert_eq!(counter.title, "Sober");
        assert_eq!(counter.category, Category::Until);
    }

    #[test]
    fn test_canonical_tags_win_over_fallbacks() {
        let rec = full_record()
            .with_tag("d", "Other title")
            .with_content(r#"{"title":"Json title","visibility":"private"}"#);
        let counter = normalize(&rec, false).unwrap();
        assert_eq!(counter.title, "Quit smoking");
        assert_eq!(counter.visibility, Visibility::Public);
    }

    #[test]
    fn test_alternate_tags_win_over_json() {
        let rec = record()
            .with_tag("d", "From d tag")
            .with_tag("date", "2023-01-01")
            .with_content(r#"{"title":"From json","type":"until"}"#);
        let counter = normalize(&rec, false).unwrap();
        assert_eq!(counter.title, "From d tag");
        assert_eq!(counter.category, Category::Until);
    }

    #[test]
    fn test_missing_mandatory_fields() {
        let no_title = record().with_tag("type", "since").with_tag("date", "2023-01-01");
        assert_eq!(try_normalize(&no_title, false), Err(RejectReason::MissingTitle));

        let no_date = record().with_tag("type", "since").with_tag("title", "Title");
        assert_eq!(try_normalize(&no_date, false), Err(RejectReason::MissingDate));
    }

    #[test]
    fn test_type_is_optional_with_static_default() {
        let rec = record().with_tag("title", "Title").with_tag("date", "2099-12-31");
        assert_eq!(normalize(&rec, false).unwrap().category, Category::Since);
    }

    #[test]
    fn test_invalid_field_values() {
        let bad_type = full_record().with_tags(vec![
            Tag::new("type", "forever"),
            Tag::new("title", "Title"),
            Tag::new("date", "2023-01-01"),
        ]);
        assert_eq!(
            try_normalize(&bad_type, false),
            Err(RejectReason::InvalidType("forever".to_string()))
        );

        let bad_visibility = record()
            .with_tag("title", "Title")
            .with_tag("date", "2023-01-01")
            .with_tag("visibility", "friends");
        assert_eq!(
            try_normalize(&bad_visibility, false),
            Err(RejectReason::InvalidVisibility("friends".to_string()))
        );

        let bad_date = record().with_tag("title", "Title").with_tag("date", "01/01/2023");
        assert_eq!(
            try_normalize(&bad_date, false),
            Err(RejectReason::InvalidDate("01/01/2023".to_string()))
        );
    }

    #[test]
    fn test_canonical_record_ignores_content_visibility() {
        let rec = record()
            .with_tag("type", "since")
            .with_tag("title", "Quit smoking")
            .with_tag("date", "2023-01-01")
            .with_content(r#"{"visibility":"private"}"#);
        assert_eq!(normalize(&rec, false).unwrap().visibility, Visibility::Public);

        let rec = rec.with_content(r#"{"visibility":"friends","note":"client metadata"}"#);
        let counter = normalize(&rec, true).unwrap();
        assert_eq!(counter.visibility, Visibility::Public);
    }

    #[test]
    fn test_fallback_fills_visibility_when_core_field_missing() {
        let rec = record()
            .with_tag("type", "since")
            .with_tag("date", "2023-01-01")
            .with_content(r#"{"title":"From content","visibility":"private"}"#);
        let counter = normalize(&rec, false).unwrap();
        assert_eq!(counter.title, "From content");
        assert_eq!(counter.visibility, Visibility::Private);
    }

    #[test]
    fn test_title_bounds() {
        let with_title = |title: String| {
            record()
                .with_tag("title", title)
                .with_tag("date", "2023-01-01")
        };

        assert!(normalize(&with_title("a".to_string()), false).is_none());
        assert!(normalize(&with_title("ab".to_string()), false).is_some());
        assert!(normalize(&with_title("a".repeat(100)), false).is_some());
        assert!(normalize(&with_title("a".repeat(101)), false).is_none());
    }

    #[test]
    fn test_require_public() {
        let private = record()
            .with_tag("title", "Title")
            .with_tag("date", "2023-01-01")
            .with_tag("visibility", "private");
        assert_eq!(try_normalize(&private, true), Err(RejectReason::NotPublic));
        assert!(normalize(&private, false).is_some());

        // Missing visibility defaults to public
        let implicit = record().with_tag("title", "Title").with_tag("date", "2023-01-01");
        assert!(normalize(&implicit, true).is_some());
    }

    #[test]
    fn test_garbage_content_is_ignored() {
        for content in ["not json", "[1,2,3]", "null", "\"str\"", "{\"title\": 5}"] {
            let rec = record().with_tag("date", "2023-01-01").with_content(content);
            assert_eq!(try_normalize(&rec, false), Err(RejectReason::MissingTitle));
        }
    }
}
