//! Field extractors, applied in order with first-non-empty-wins semantics

use serde_json::{Map, Value};

use crate::types::RawRecord;

/// Counter fields gathered from a record, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterFields {
    pub category: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub visibility: Option<String>,
}

impl CounterFields {
    /// True once `type`, `title` and `date` are all present.
    ///
    /// Visibility is not part of this: a missing visibility falls back to the
    /// default rather than pulling later extractors in.
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && self.title.is_some() && self.date.is_some()
    }
}

/// Fill `slot` with `value` unless it already holds one. Empty values count as missing.
fn fill(slot: &mut Option<String>, value: Option<&str>) {
    if slot.is_none() {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            *slot = Some(v.to_string());
        }
    }
}

/// An extraction strategy; must only fill fields that are still `None`
pub type Extractor = fn(&RawRecord, &mut CounterFields);

/// Extraction strategies in priority order
pub const EXTRACTORS: &[(&str, Extractor)] = &[
    ("canonical_tags", canonical_tags as Extractor),
    ("alternate_tags", alternate_tags as Extractor),
    ("json_content", json_content as Extractor),
];

/// `type`, `title`, `date` and `visibility` tags, first occurrence of each
pub fn canonical_tags(record: &RawRecord, fields: &mut CounterFields) {
    fill(&mut fields.category, record.first_tag_value("type"));
    fill(&mut fields.title, record.first_tag_value("title"));
    fill(&mut fields.date, record.first_tag_value("date"));
    fill(&mut fields.visibility, record.first_tag_value("visibility"));
}

/// `d` tag as title, `t` tag as type
pub fn alternate_tags(record: &RawRecord, fields: &mut CounterFields) {
    for tag in &record.tags {
        match tag.name() {
            Some("d") => fill(&mut fields.title, tag.value()),
            Some("t") => fill(&mut fields.category, tag.value()),
            _ => {}
        }
    }
}

/// Content parsed as a JSON object with string properties
pub fn json_content(record: &RawRecord, fields: &mut CounterFields) {
    if record.content.trim().is_empty() {
        return;
    }

    let object = match serde_json::from_str::<Value>(&record.content) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return,
        Err(e) => {
            tracing::trace!(id = %record.id, error = %e, "Content is not JSON");
            return;
        }
    };

    fill(&mut fields.title, string_prop(&object, "title"));
    fill(&mut fields.category, string_prop(&object, "type"));
    fill(&mut fields.date, string_prop(&object, "date"));
    fill(&mut fields.visibility, string_prop(&object, "visibility"));
}

fn string_prop<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KIND_COUNTER;

    fn record() -> RawRecord {
        RawRecord::new("r", "pk", KIND_COUNTER, 1)
    }

    #[test]
    fn test_canonical_first_occurrence_and_empty() {
        let rec = record()
            .with_tag("title", "First")
            .with_tag("title", "Second")
            .with_tag("type", "");
        let mut fields = CounterFields::default();
        canonical_tags(&rec, &mut fields);

        assert_eq!(fields.title.as_deref(), Some("First"));
        assert_eq!(fields.category, None);
    }

    #[test]
    fn test_alternate_does_not_overwrite() {
        let rec = record()
            .with_tag("d", "")
            .with_tag("d", "Slug title")
            .with_tag("t", "until")
            .with_tag("t", "since");
        let mut fields = CounterFields {
            category: Some("since".to_string()),
            ..Default::default()
        };
        alternate_tags(&rec, &mut fields);

        assert_eq!(fields.title.as_deref(), Some("Slug title"));
        assert_eq!(fields.category.as_deref(), Some("since"));
    }

    #[test]
    fn test_json_content_fills_missing_only() {
        let rec = record().with_content(
            r#"{"title":"Json","type":"until","date":"2030-01-01","visibility":"private"}"#,
        );
        let mut fields = CounterFields {
            title: Some("Tag".to_string()),
            ..Default::default()
        };
        json_content(&rec, &mut fields);

        assert_eq!(fields.title.as_deref(), Some("Tag"));
        assert_eq!(fields.category.as_deref(), Some("until"));
        assert_eq!(fields.date.as_deref(), Some("2030-01-01"));
        assert_eq!(fields.visibility.as_deref(), Some("private"));
        assert!(fields.is_complete());
    }

    #[test]
    fn test_complete_without_visibility() {
        let fields = CounterFields {
            category: Some("since".to_string()),
            title: Some("Title".to_string()),
            date: Some("2023-01-01".to_string()),
            visibility: None,
        };
        assert!(fields.is_complete());
        assert!(!CounterFields::default().is_complete());
    }

    #[test]
    fn test_json_content_blank_or_invalid() {
        let mut fields = CounterFields::default();
        json_content(&record().with_content("   "), &mut fields);
        json_content(&record().with_content("{broken"), &mut fields);
        json_content(&record().with_content("[\"title\"]"), &mut fields);
        assert_eq!(fields, CounterFields::default());
    }
}
