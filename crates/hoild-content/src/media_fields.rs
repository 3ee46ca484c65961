//! Allow-list of field names that carry media-attachment ids.

use std::collections::BTreeSet;

/// Field names whose numeric values are media ids everywhere they appear.
///
/// Membership is decided by field name alone, never by the enclosing block's
/// layout tag, so the union below covers every page family.
const DEFAULT_FIELDS: &[&str] = &[
    "avatar",
    "background_image",
    "bg_image",
    "brand_logo",
    "client_logo",
    "feature_icon",
    "featured_image",
    "foreground_image",
    "hero_image",
    "icon",
    "image",
    "imageicon",
    "logo",
    "service_icon",
    "thumbnail",
    "usp_icon",
    "usp_main_image",
];

/// Exact-match set of media field names, injected into the resolver.
///
/// The default set is shared by all routes; call sites needing extra fields
/// extend it rather than forking the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFields(BTreeSet<String>);

impl Default for MediaFields {
    fn default() -> Self {
        Self(DEFAULT_FIELDS.iter().map(|&f| f.to_owned()).collect())
    }
}

impl MediaFields {
    /// The default allow-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty allow-list (no field is ever treated as a media id).
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a field name (builder style).
    #[must_use]
    pub fn with(mut self, field: impl Into<String>) -> Self {
        self.0.insert(field.into());
        self
    }

    /// Add several field names.
    pub fn extend<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(fields.into_iter().map(Into::into));
    }

    /// Exact-match membership test.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    /// Number of field names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
