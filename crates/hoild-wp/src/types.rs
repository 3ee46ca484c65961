//! Typed WordPress REST payloads.
//!
//! Only the fields the engine reads are typed; layout-specific content stays
//! as raw JSON under `acf` and is handled generically by the resolver.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A WP "rendered" wrapper (`{"rendered": "<p>...</p>"}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Rendered HTML.
    #[serde(default)]
    pub rendered: String,
}

/// A CMS entity: page, post, service, testimonial or case study.
///
/// WP returns the same envelope for all of them; post-only fields like
/// `categories` default to empty elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// WP entity id.
    pub id: u64,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Publication date (ISO 8601, site timezone).
    #[serde(default)]
    pub date: Option<String>,
    /// Rendered title.
    #[serde(default)]
    pub title: Option<Rendered>,
    /// Rendered body content.
    #[serde(default)]
    pub content: Option<Rendered>,
    /// Rendered excerpt.
    #[serde(default)]
    pub excerpt: Option<Rendered>,
    /// Category term ids (posts only).
    #[serde(default)]
    pub categories: Vec<u64>,
    /// ACF field group, including the builder fields. Kept untyped.
    #[serde(default)]
    pub acf: Value,
}

/// A WP media attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObject {
    /// Attachment id.
    pub id: u64,
    /// Canonical file URL (core WP field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// File URL as exposed by ACF-shaped endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl MediaObject {
    /// The usable URL for this attachment, whichever field carries it.
    #[must_use]
    pub fn best_url(&self) -> Option<&str> {
        self.source_url.as_deref().or(self.url.as_deref())
    }
}

/// A flat navigation menu item from the custom menu endpoint.
///
/// Hierarchy is encoded through `parent` and rebuilt by the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu item id.
    #[serde(deserialize_with = "lenient_u64")]
    pub id: u64,
    /// Parent item id; 0 means root. The endpoint sometimes serializes this
    /// as the string `"0"`, hence the lenient deserializer.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub parent: u64,
    /// Menu position, ascending.
    #[serde(default, rename = "menu_order", deserialize_with = "lenient_u64")]
    pub order: u64,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Link target.
    #[serde(default)]
    pub url: String,
}

/// Accept a u64 given either as a JSON number or a numeric string.
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom("expected a non-negative integer")),
        Value::String(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id string: {s:?}"))),
        Value::Null => Ok(0),
        other => Err(serde::de::Error::custom(format!(
            "expected number or string id, got {other}"
        ))),
    }
}
