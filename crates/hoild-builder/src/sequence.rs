//! Render instructions emitted by the dispatcher.

use std::num::NonZeroUsize;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dispatch::SectionRenderer;

/// One entry of a render sequence: which renderer to mount and with what.
///
/// `key` is the block's index in the authored builder, kept stable across
/// dropped blocks so the render layer can use it as a reconciliation key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInstruction {
    /// Original block index in the builder array.
    pub key: usize,
    /// Renderer identifier.
    pub renderer: SectionRenderer,
    /// The block's resolved fields.
    pub props: Map<String, Value>,
    /// 1-based position within a consecutive run of grouping-eligible
    /// blocks; `None` means no counter badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<NonZeroUsize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_instruction_serializes_camel_case() {
        let instruction = SectionInstruction {
            key: 3,
            renderer: SectionRenderer::ImageContent,
            props: Map::new(),
            ordinal: NonZeroUsize::new(2),
        };

        let value = serde_json::to_value(&instruction).unwrap();
        assert_eq!(value["key"], json!(3));
        assert_eq!(value["renderer"], json!("image_content"));
        assert_eq!(value["ordinal"], json!(2));
    }

    #[test]
    fn test_absent_ordinal_is_omitted() {
        let instruction = SectionInstruction {
            key: 0,
            renderer: SectionRenderer::HomeHero,
            props: Map::new(),
            ordinal: None,
        };

        let value = serde_json::to_value(&instruction).unwrap();
        assert!(value.get("ordinal").is_none());
    }
}
