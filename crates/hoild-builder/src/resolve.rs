//! Recursive media-reference resolution.

use futures::future::{BoxFuture, join_all};
use serde_json::{Map, Value};

use hoild_content::{ContentBlock, MediaFields};
use hoild_wp::ContentSource;

/// What a resolved media reference is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedShape {
    /// A plain URL string; consumers expect `src`-ready values.
    Url,
    /// The full media object as JSON; consumers pick `url`/`source_url`
    /// themselves and null-check.
    Object,
}

/// Resolver configuration: which fields carry media ids and what a failed
/// lookup turns into.
///
/// The not-found default is an explicit parameter because call sites differ:
/// URL-shaped sites substitute `""`, object-shaped sites substitute `null`.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Allow-list of media field names.
    pub fields: MediaFields,
    /// Replacement shape for resolved references.
    pub shape: ResolvedShape,
    /// Value substituted when a lookup fails or finds nothing.
    pub not_found: Value,
}

impl ResolveOptions {
    /// URL-shaped resolution with the default field set; failures become
    /// empty strings.
    #[must_use]
    pub fn url() -> Self {
        Self {
            fields: MediaFields::new(),
            shape: ResolvedShape::Url,
            not_found: Value::String(String::new()),
        }
    }

    /// Object-shaped resolution with the default field set; failures become
    /// `null`.
    #[must_use]
    pub fn object() -> Self {
        Self {
            fields: MediaFields::new(),
            shape: ResolvedShape::Object,
            not_found: Value::Null,
        }
    }

    /// Replace the field allow-list.
    #[must_use]
    pub fn with_fields(mut self, fields: MediaFields) -> Self {
        self.fields = fields;
        self
    }

    /// Replace the not-found default.
    #[must_use]
    pub fn with_not_found(mut self, value: Value) -> Self {
        self.not_found = value;
        self
    }
}

/// Extract a media id from a field value, if the field is allow-listed and
/// the value is an unresolved reference.
///
/// Only positive integers count; negative numbers, floats and zero are
/// malformed references and are left untouched. Objects and arrays are
/// already-resolved or nested content, never references, which is what makes
/// resolution idempotent.
fn media_id(key: &str, value: &Value, fields: &MediaFields) -> Option<u64> {
    if !fields.contains(key) {
        return None;
    }
    value.as_u64().filter(|&id| id > 0)
}

/// Recursive, concurrent media-reference resolver.
///
/// Walks any JSON-like tree; for each object field whose name is in the
/// allow-list and whose value is a positive integer, fetches the referenced
/// attachment and substitutes the configured shape. Sibling fields and array
/// elements resolve concurrently; fan-in preserves input order. A failed
/// lookup substitutes the configured default and never fails the walk.
pub struct MediaResolver<'a> {
    source: &'a dyn ContentSource,
    options: ResolveOptions,
}

impl<'a> MediaResolver<'a> {
    /// Create a resolver over a content source.
    pub fn new(source: &'a dyn ContentSource, options: ResolveOptions) -> Self {
        Self { source, options }
    }

    /// Resolve a whole tree, returning the transformed copy.
    pub async fn resolve(&self, node: Value) -> Value {
        self.walk(node).await
    }

    /// Resolve a builder's blocks, all concurrently.
    pub async fn resolve_blocks(&self, blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
        join_all(blocks.into_iter().map(|block| async move {
            ContentBlock {
                layout: block.layout,
                fields: self.walk_object(block.fields).await,
            }
        }))
        .await
    }

    /// One recursion step. Boxed because async recursion needs a nameable
    /// future type.
    fn walk(&self, node: Value) -> BoxFuture<'_, Value> {
        Box::pin(async move {
            match node {
                Value::Array(items) => {
                    Value::Array(join_all(items.into_iter().map(|item| self.walk(item))).await)
                }
                Value::Object(map) => Value::Object(self.walk_object(map).await),
                other => other,
            }
        })
    }

    async fn walk_object(&self, map: Map<String, Value>) -> Map<String, Value> {
        let entries = map.into_iter().map(|(key, value)| async move {
            let resolved = match media_id(&key, &value, &self.options.fields) {
                Some(id) => self.lookup(id).await,
                None if value.is_object() || value.is_array() => self.walk(value).await,
                None => value,
            };
            (key, resolved)
        });
        join_all(entries).await.into_iter().collect()
    }

    /// Fetch one attachment and map it to the configured shape.
    async fn lookup(&self, id: u64) -> Value {
        match self.source.media_by_id(id).await {
            Ok(Some(media)) => match self.options.shape {
                ResolvedShape::Url => media
                    .best_url()
                    .map_or_else(|| self.options.not_found.clone(), |url| url.into()),
                ResolvedShape::Object => {
                    serde_json::to_value(&media).unwrap_or(Value::Null)
                }
            },
            Ok(None) => {
                tracing::warn!(id, "media reference did not resolve");
                self.options.not_found.clone()
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "media lookup failed");
                self.options.not_found.clone()
            }
        }
    }
}
