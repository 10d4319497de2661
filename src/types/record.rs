//! Raw record types as delivered by the transport layer
//!
//! Records are immutable and append-only. Nothing here is trusted: tags may be
//! missing, repeated, or carry values of the wrong shape.

use serde::{Deserialize, Serialize};

use super::is_zero;

/// A single tag: an ordered list of strings whose first element is the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a two-element `[name, value]` tag
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self(vec![name.into(), value.into()])
    }

    /// Tag name (first element)
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Tag value (second element)
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// True when the tag is named `name`
    pub fn is(&self, name: &str) -> bool {
        self.name() == Some(name)
    }
}

impl<S: Into<String>> From<Vec<S>> for Tag {
    fn from(parts: Vec<S>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }
}

/// An immutable record from the event network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Unique record identifier
    pub id: String,

    /// Author identifier
    pub pubkey: String,

    /// Kind discriminant
    pub kind: u32,

    /// Unix timestamp (seconds) of creation, 0 when absent
    #[serde(default, skip_serializing_if = "is_zero")]
    pub created_at: u64,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub content: String,

    /// Signature, already verified upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

impl RawRecord {
    /// Create a record without tags or content
    pub fn new(id: impl Into<String>, pubkey: impl Into<String>, kind: u32, created_at: u64) -> Self {
        Self {
            id: id.into(),
            pubkey: pubkey.into(),
            kind,
            created_at,
            tags: Vec::new(),
            content: String::new(),
            sig: None,
        }
    }

    /// Append a `[name, value]` tag
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(name, value));
        self
    }

    /// Replace the tag list
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the content field
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// All tags with the given name, in order
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.is(name))
    }

    /// Value of the first tag with the given name.
    ///
    /// Only the first occurrence counts; a later tag of the same name never
    /// replaces an earlier one, even when the earlier value is empty.
    pub fn first_tag_value(&self, name: &str) -> Option<&str> {
        self.tags.iter().find(|t| t.is(name)).and_then(Tag::value)
    }

    /// True when any tag named `name` has a value satisfying `pred`
    pub fn any_tag(&self, name: &str, pred: impl Fn(&str) -> bool) -> bool {
        self.tags
            .iter()
            .filter(|t| t.is(name))
            .any(|t| t.value().is_some_and(&pred))
    }

    /// Deserialize a record from a JSON line
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Serialize the record to a JSON line
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
