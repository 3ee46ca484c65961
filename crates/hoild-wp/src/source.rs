//! The content-source contract.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::WpError;
use crate::types::{Entity, MediaObject, MenuItem};

/// Read-only access to CMS content.
///
/// Implemented by [`WpClient`](crate::WpClient) over HTTP and by the
/// in-memory mock for tests. All methods are reads; the engine has no write
/// path.
///
/// Entity lookups return `Ok(None)` for both "no match" and HTTP error
/// statuses: the assembler treats both as not-found. Chrome reads (`menu`
/// and the option/widget endpoints) are best-effort and return empty values
/// on any failure.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch a page by slug (first match).
    async fn page_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError>;

    /// Fetch a blog post by slug (first match).
    async fn post_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError>;

    /// Fetch a service custom-post-type entry by slug.
    async fn service_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError>;

    /// Fetch a testimonial by slug.
    async fn testimonial_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError>;

    /// Fetch a case study by slug.
    async fn case_study_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError>;

    /// Fetch a media attachment by id.
    async fn media_by_id(&self, id: u64) -> Result<Option<MediaObject>, WpError>;

    /// Fetch recent posts, newest first, optionally filtered by category
    /// term ids. Used as the candidate pool for related-post selection.
    async fn recent_posts(&self, categories: &[u64], per_page: u32)
    -> Result<Vec<Entity>, WpError>;

    /// Fetch the navigation menu as a flat item list. Empty on failure.
    async fn menu(&self) -> Vec<MenuItem>;

    /// Fetch header options (logo etc). Empty object on failure.
    async fn header_options(&self) -> Value;

    /// Fetch footer widget areas keyed by widget slug. Empty on failure.
    async fn footer_widgets(&self) -> Map<String, Value>;

    /// Fetch footer options (logo, social links, copyright). Empty object on
    /// failure.
    async fn footer_options(&self) -> Value;
}
