//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::WpError;
use crate::source::ContentSource;
use crate::types::{Entity, MediaObject, MenuItem};

/// Mock content source for testing.
///
/// Stores entities and media in memory. Use the builder methods to configure
/// the mock with test data; media lookups are recorded so tests can assert
/// exactly which ids were requested.
///
/// # Example
///
/// ```ignore
/// use hoild_wp::{ContentSource, MockSource};
/// use serde_json::json;
///
/// let source = MockSource::new()
///     .with_page("about", json!({"inner_page_builder": []}))
///     .with_media_url(42, "https://cms.example/icon.png");
///
/// let page = source.page_by_slug("about").await.unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    pages: RwLock<HashMap<String, Entity>>,
    posts: RwLock<HashMap<String, Entity>>,
    services: RwLock<HashMap<String, Entity>>,
    testimonials: RwLock<HashMap<String, Entity>>,
    case_studies: RwLock<HashMap<String, Entity>>,
    media: RwLock<HashMap<u64, MediaObject>>,
    failing_media: RwLock<HashSet<u64>>,
    media_lookups: RwLock<Vec<u64>>,
    recent: RwLock<Vec<Entity>>,
    menu_items: RwLock<Vec<MenuItem>>,
    header: RwLock<Value>,
    widgets: RwLock<Map<String, Value>>,
    footer: RwLock<Value>,
}

/// Build a bare entity around an ACF object.
fn entity(id: u64, slug: &str, acf: Value) -> Entity {
    Entity {
        id,
        slug: slug.to_owned(),
        acf,
        ..Entity::default()
    }
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given slug and ACF object.
    #[must_use]
    pub fn with_page(self, slug: &str, acf: Value) -> Self {
        let id = self.next_id();
        self.pages
            .write()
            .unwrap()
            .insert(slug.to_owned(), entity(id, slug, acf));
        self
    }

    /// Add a fully-specified post entity keyed by its slug.
    #[must_use]
    pub fn with_post(self, post: Entity) -> Self {
        self.posts.write().unwrap().insert(post.slug.clone(), post);
        self
    }

    /// Add a service with the given slug and ACF object.
    #[must_use]
    pub fn with_service(self, slug: &str, acf: Value) -> Self {
        let id = self.next_id();
        self.services
            .write()
            .unwrap()
            .insert(slug.to_owned(), entity(id, slug, acf));
        self
    }

    /// Add a testimonial with the given slug and ACF object.
    #[must_use]
    pub fn with_testimonial(self, slug: &str, acf: Value) -> Self {
        let id = self.next_id();
        self.testimonials
            .write()
            .unwrap()
            .insert(slug.to_owned(), entity(id, slug, acf));
        self
    }

    /// Add a case study with the given slug and ACF object.
    #[must_use]
    pub fn with_case_study(self, slug: &str, acf: Value) -> Self {
        let id = self.next_id();
        self.case_studies
            .write()
            .unwrap()
            .insert(slug.to_owned(), entity(id, slug, acf));
        self
    }

    /// Add a media attachment resolving to the given URL.
    #[must_use]
    pub fn with_media_url(self, id: u64, url: &str) -> Self {
        self.media.write().unwrap().insert(
            id,
            MediaObject {
                id,
                source_url: Some(url.to_owned()),
                url: None,
                alt_text: None,
            },
        );
        self
    }

    /// Add a fully-specified media attachment.
    #[must_use]
    pub fn with_media(self, media: MediaObject) -> Self {
        self.media.write().unwrap().insert(media.id, media);
        self
    }

    /// Make lookups of the given media id fail with an HTTP error.
    #[must_use]
    pub fn with_failing_media(self, id: u64) -> Self {
        self.failing_media.write().unwrap().insert(id);
        self
    }

    /// Set the recent-posts pool returned by [`ContentSource::recent_posts`].
    #[must_use]
    pub fn with_recent_posts(self, posts: Vec<Entity>) -> Self {
        *self.recent.write().unwrap() = posts;
        self
    }

    /// Set the flat menu item list.
    #[must_use]
    pub fn with_menu(self, items: Vec<MenuItem>) -> Self {
        *self.menu_items.write().unwrap() = items;
        self
    }

    /// Set the header options object.
    #[must_use]
    pub fn with_header_options(self, options: Value) -> Self {
        *self.header.write().unwrap() = options;
        self
    }

    /// Set the footer widget map.
    #[must_use]
    pub fn with_footer_widgets(self, widgets: Map<String, Value>) -> Self {
        *self.widgets.write().unwrap() = widgets;
        self
    }

    /// Set the footer options object.
    #[must_use]
    pub fn with_footer_options(self, options: Value) -> Self {
        *self.footer.write().unwrap() = options;
        self
    }

    /// Every media id looked up so far, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn media_lookups(&self) -> Vec<u64> {
        self.media_lookups.read().unwrap().clone()
    }

    /// Synthesize an entity id distinct from ones handed out so far.
    fn next_id(&self) -> u64 {
        let count = self.pages.read().unwrap().len()
            + self.posts.read().unwrap().len()
            + self.services.read().unwrap().len()
            + self.testimonials.read().unwrap().len()
            + self.case_studies.read().unwrap().len();
        1000 + count as u64
    }

    fn lookup(map: &RwLock<HashMap<String, Entity>>, slug: &str) -> Option<Entity> {
        map.read().unwrap().get(slug).cloned()
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn page_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        Ok(Self::lookup(&self.pages, slug))
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        Ok(Self::lookup(&self.posts, slug))
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        Ok(Self::lookup(&self.services, slug))
    }

    async fn testimonial_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        Ok(Self::lookup(&self.testimonials, slug))
    }

    async fn case_study_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        Ok(Self::lookup(&self.case_studies, slug))
    }

    async fn media_by_id(&self, id: u64) -> Result<Option<MediaObject>, WpError> {
        self.media_lookups.write().unwrap().push(id);
        if self.failing_media.read().unwrap().contains(&id) {
            return Err(WpError::HttpResponse {
                status: 500,
                url: format!("mock://media/{id}"),
            });
        }
        Ok(self.media.read().unwrap().get(&id).cloned())
    }

    async fn recent_posts(
        &self,
        categories: &[u64],
        per_page: u32,
    ) -> Result<Vec<Entity>, WpError> {
        let pool = self.recent.read().unwrap();
        let filtered: Vec<Entity> = pool
            .iter()
            .filter(|post| {
                categories.is_empty() || post.categories.iter().any(|c| categories.contains(c))
            })
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok(filtered)
    }

    async fn menu(&self) -> Vec<MenuItem> {
        self.menu_items.read().unwrap().clone()
    }

    async fn header_options(&self) -> Value {
        self.header.read().unwrap().clone()
    }

    async fn footer_widgets(&self) -> Map<String, Value> {
        self.widgets.read().unwrap().clone()
    }

    async fn footer_options(&self) -> Value {
        self.footer.read().unwrap().clone()
    }
}
