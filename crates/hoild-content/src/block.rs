//! Content blocks and builder-field probing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One flexible-content block from a CMS builder field.
///
/// The layout tag is authored in the CMS and is an open-ended set: unknown
/// tags are valid input and are handled downstream by the dispatcher. All
/// remaining fields are kept as raw JSON because each layout has its own
/// shape and the resolver operates generically over the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Layout tag deciding which section renders this block.
    #[serde(rename = "acf_fc_layout")]
    pub layout: String,
    /// Layout-specific fields, untyped.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentBlock {
    /// Create a block with a layout tag and no fields.
    #[must_use]
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            fields: Map::new(),
        }
    }

    /// Add a field (builder style, used mostly in tests).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// Which builder field a page was authored with.
///
/// Pages carry their sections in one of two ACF fields depending on the page
/// family. The kind is decided once, at fetch time, and carried through
/// assembly so the matching dispatch table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderKind {
    /// Landing-page family (`page_builder` field).
    TopLevel,
    /// Generic inner-page family (`inner_page_builder` field).
    Inner,
}

impl BuilderKind {
    /// The ACF field name carrying the builder for this kind.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::TopLevel => "page_builder",
            Self::Inner => "inner_page_builder",
        }
    }

    /// Probe an entity's ACF object for a builder field.
    ///
    /// Checks `page_builder` first, then `inner_page_builder`; the first
    /// field holding a non-empty array wins. Returns `None` when neither is
    /// present, so callers can render an empty page rather than fail.
    #[must_use]
    pub fn probe(acf: &Value) -> Option<(Self, Vec<Value>)> {
        for kind in [Self::TopLevel, Self::Inner] {
            if let Some(Value::Array(blocks)) = acf.get(kind.field_name())
                && !blocks.is_empty()
            {
                return Some((kind, blocks.clone()));
            }
        }
        None
    }
}

/// Parse a builder array into content blocks.
///
/// Entries that are not objects or lack a layout tag are skipped: the CMS
/// only produces tagged objects here, but malformed data must not take the
/// whole page down.
#[must_use]
pub fn blocks_from_value(builder: Value) -> Vec<ContentBlock> {
    let Value::Array(entries) = builder else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_block_deserializes_layout_and_fields() {
        let block: ContentBlock = serde_json::from_value(json!({
            "acf_fc_layout": "banner",
            "heading": "Welcome",
            "bg_image": 42,
        }))
        .unwrap();

        assert_eq!(block.layout, "banner");
        assert_eq!(block.fields["heading"], json!("Welcome"));
        assert_eq!(block.fields["bg_image"], json!(42));
    }

    #[test]
    fn test_block_roundtrips_flattened_fields() {
        let block = ContentBlock::new("usp_section").with_field("title", json!("Why us"));
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["acf_fc_layout"], json!("usp_section"));
        assert_eq!(value["title"], json!("Why us"));
    }

    #[test]
    fn test_probe_prefers_top_level_builder() {
        let acf = json!({
            "page_builder": [{"acf_fc_layout": "banner"}],
            "inner_page_builder": [{"acf_fc_layout": "content_block"}],
        });

        let (kind, blocks) = BuilderKind::probe(&acf).unwrap();
        assert_eq!(kind, BuilderKind::TopLevel);
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_probe_falls_back_to_inner_builder() {
        let acf = json!({
            "page_builder": [],
            "inner_page_builder": [{"acf_fc_layout": "content_block"}],
        });

        let (kind, _) = BuilderKind::probe(&acf).unwrap();
        assert_eq!(kind, BuilderKind::Inner);
    }

    #[test]
    fn test_probe_returns_none_without_builder() {
        assert!(BuilderKind::probe(&json!({})).is_none());
        assert!(BuilderKind::probe(&json!({"page_builder": []})).is_none());
        assert!(BuilderKind::probe(&json!({"page_builder": "oops"})).is_none());
    }

    #[test]
    fn test_blocks_from_value_skips_malformed_entries() {
        let builder = json!([
            {"acf_fc_layout": "banner", "heading": "Hi"},
            "not-a-block",
            {"heading": "missing tag"},
            {"acf_fc_layout": "usp_section"},
        ]);

        let blocks = blocks_from_value(builder);
        let layouts: Vec<_> = blocks.iter().map(|b| b.layout.as_str()).collect();
        assert_eq!(layouts, vec!["banner", "usp_section"]);
    }
}
