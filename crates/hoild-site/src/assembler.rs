//! Per-route page assembly.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use hoild_builder::{
    DispatchTable, MediaResolver, ResolveOptions, SectionInstruction, dispatch,
};
use hoild_content::{BuilderKind, MediaFields, blocks_from_value};
use hoild_wp::{ContentSource, Entity};

/// Candidate pool size requested for related-post selection.
const RELATED_POOL: u32 = 8;

/// Maximum related posts surfaced per article.
const RELATED_MAX: usize = 6;

/// An assembled builder page, ready for the render layer.
#[derive(Debug, Clone, Serialize)]
pub struct PageDocument {
    /// Which builder family the page was authored with.
    pub kind: BuilderKind,
    /// Ordered render instructions. May be empty for a page with no builder
    /// content; that is a valid page, not a not-found.
    pub sections: Vec<SectionInstruction>,
}

/// An assembled article (blog post or insight).
#[derive(Debug, Clone, Serialize)]
pub struct PostDocument {
    /// The post entity (title, rendered content, dates).
    pub post: Entity,
    /// Related posts sharing a category, newest first, current excluded.
    pub related: Vec<Entity>,
    /// Render instructions from the post's optional inner builder.
    pub sections: Vec<SectionInstruction>,
}

/// Route-level orchestration: fetch, resolve, dispatch.
///
/// Every `assemble_*` method returns `None` as the not-found terminal. Fetch
/// failures behave exactly like absence; they are logged here and never
/// surface to the render layer.
pub struct PageAssembler {
    source: Arc<dyn ContentSource>,
    media_fields: MediaFields,
}

impl PageAssembler {
    /// Create an assembler over a content source with the default media
    /// field allow-list.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            media_fields: MediaFields::new(),
        }
    }

    /// Replace the media field allow-list (builder style).
    #[must_use]
    pub fn with_media_fields(mut self, fields: MediaFields) -> Self {
        self.media_fields = fields;
        self
    }

    /// The underlying content source.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn ContentSource> {
        &self.source
    }

    /// Assemble the home page.
    ///
    /// Fetches the `home` page, resolves media to plain URLs (missing media
    /// becomes `""`) and dispatches with the landing table.
    pub async fn assemble_home(&self) -> Option<PageDocument> {
        let page = self.fetch_page("home").await?;
        let blocks = builder_field(&page, BuilderKind::TopLevel);
        let sections = self
            .resolve_and_dispatch(blocks, BuilderKind::TopLevel, ResolveOptions::url())
            .await;
        Some(PageDocument {
            kind: BuilderKind::TopLevel,
            sections,
        })
    }

    /// Assemble a generic page by slug.
    ///
    /// Probes both builder fields; the winning field fixes the dispatch
    /// table. Media resolves to full objects (missing media becomes `null`)
    /// so renderers can pick `url`/`source_url` themselves.
    pub async fn assemble_page(&self, slug: &str) -> Option<PageDocument> {
        if slug.is_empty() {
            return None;
        }
        let page = self.fetch_page(slug).await?;

        let (kind, blocks) = match BuilderKind::probe(&page.acf) {
            Some((kind, blocks)) => (kind, Value::Array(blocks)),
            // A page without builder content still renders (as an empty
            // landing page), it is only the entity that can be missing.
            None => (BuilderKind::TopLevel, Value::Array(Vec::new())),
        };
        let sections = self
            .resolve_and_dispatch(blocks, kind, ResolveOptions::object())
            .await;
        Some(PageDocument { kind, sections })
    }

    /// Assemble an article (blog post or insight) by slug, with related
    /// posts and its optional inner builder.
    pub async fn assemble_post(&self, slug: &str) -> Option<PostDocument> {
        if slug.is_empty() {
            return None;
        }
        let post = match self.source.post_by_slug(slug).await {
            Ok(found) => found?,
            Err(err) => {
                tracing::warn!(slug, error = %err, "post fetch failed");
                return None;
            }
        };

        let related = self.related_posts(&post).await;
        let blocks = builder_field(&post, BuilderKind::Inner);
        let sections = self
            .resolve_and_dispatch(blocks, BuilderKind::Inner, ResolveOptions::url())
            .await;

        Some(PostDocument {
            post,
            related,
            sections,
        })
    }

    /// Assemble a service page by slug (inner builder only).
    pub async fn assemble_service(&self, slug: &str) -> Option<PageDocument> {
        if slug.is_empty() {
            return None;
        }
        let service = match self.source.service_by_slug(slug).await {
            Ok(found) => found?,
            Err(err) => {
                tracing::warn!(slug, error = %err, "service fetch failed");
                return None;
            }
        };

        let blocks = builder_field(&service, BuilderKind::Inner);
        let sections = self
            .resolve_and_dispatch(blocks, BuilderKind::Inner, ResolveOptions::url())
            .await;
        Some(PageDocument {
            kind: BuilderKind::Inner,
            sections,
        })
    }

    /// Fetch a page, collapsing errors to absence.
    async fn fetch_page(&self, slug: &str) -> Option<Entity> {
        match self.source.page_by_slug(slug).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(slug, error = %err, "page fetch failed");
                None
            }
        }
    }

    /// Run the shared resolver/dispatcher core over a builder value.
    async fn resolve_and_dispatch(
        &self,
        builder: Value,
        kind: BuilderKind,
        options: ResolveOptions,
    ) -> Vec<SectionInstruction> {
        let options = options.with_fields(self.media_fields.clone());
        let resolver = MediaResolver::new(self.source.as_ref(), options);
        let resolved = resolver.resolve_blocks(blocks_from_value(builder)).await;

        let table = match kind {
            BuilderKind::TopLevel => DispatchTable::top_level(),
            BuilderKind::Inner => DispatchTable::inner(),
        };
        dispatch(table, &resolved)
    }

    /// Best-effort related posts: same category, newest first, the post
    /// itself excluded, capped at [`RELATED_MAX`].
    async fn related_posts(&self, post: &Entity) -> Vec<Entity> {
        match self.source.recent_posts(&post.categories, RELATED_POOL).await {
            Ok(pool) => pool
                .into_iter()
                .filter(|candidate| candidate.id != post.id)
                .take(RELATED_MAX)
                .collect(),
            Err(err) => {
                tracing::warn!(post = post.id, error = %err, "related posts fetch failed");
                Vec::new()
            }
        }
    }
}

/// Pull a specific builder field's array out of an entity, or empty.
fn builder_field(entity: &Entity, kind: BuilderKind) -> Value {
    entity
        .acf
        .get(kind.field_name())
        .cloned()
        .unwrap_or(Value::Array(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoild_builder::SectionRenderer;
    use hoild_wp::MockSource;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn assembler(source: MockSource) -> PageAssembler {
        PageAssembler::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found_without_lookups() {
        let source = Arc::new(MockSource::new());
        let assembler = PageAssembler::new(Arc::clone(&source) as Arc<dyn ContentSource>);

        assert!(assembler.assemble_page("nope").await.is_none());
        // Not found short-circuits: the resolver never ran.
        assert!(source.media_lookups().is_empty());
    }

    #[tokio::test]
    async fn test_empty_slug_is_not_found() {
        let assembler = assembler(MockSource::new().with_page("", json!({})));
        assert!(assembler.assemble_page("").await.is_none());
    }

    #[tokio::test]
    async fn test_home_resolves_urls_and_dispatches_landing_table() {
        let source = MockSource::new()
            .with_page(
                "home",
                json!({
                    "page_builder": [
                        {"acf_fc_layout": "banner", "bg_image": 5, "heading": "Hi"},
                        {"acf_fc_layout": "mystery_section"},
                        {"acf_fc_layout": "usp_section", "usp_icon": 404},
                    ]
                }),
            )
            .with_media_url(5, "https://cms.example/bg.jpg");
        let assembler = assembler(source);

        let doc = assembler.assemble_home().await.unwrap();

        assert_eq!(doc.kind, BuilderKind::TopLevel);
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].renderer, SectionRenderer::HomeHero);
        assert_eq!(
            doc.sections[0].props["bg_image"],
            json!("https://cms.example/bg.jpg")
        );
        // Missing media in a URL-shaped route collapses to "".
        assert_eq!(doc.sections[1].props["usp_icon"], json!(""));
        assert_eq!(doc.sections[1].key, 2);
    }

    #[tokio::test]
    async fn test_generic_page_probes_inner_builder() {
        let source = MockSource::new()
            .with_page(
                "about",
                json!({
                    "inner_page_builder": [
                        {"acf_fc_layout": "inner_hero_section", "hero_image": 8},
                    ]
                }),
            )
            .with_media_url(8, "https://cms.example/hero.jpg");
        let assembler = assembler(source);

        let doc = assembler.assemble_page("about").await.unwrap();

        assert_eq!(doc.kind, BuilderKind::Inner);
        assert_eq!(doc.sections[0].renderer, SectionRenderer::InnerHero);
        // Object-shaped route hands the renderer the full media object.
        assert_eq!(
            doc.sections[0].props["hero_image"]["source_url"],
            json!("https://cms.example/hero.jpg")
        );
    }

    #[tokio::test]
    async fn test_generic_page_missing_media_becomes_null() {
        let source = MockSource::new().with_page(
            "about",
            json!({
                "inner_page_builder": [
                    {"acf_fc_layout": "content_block", "image": 999},
                ]
            }),
        );
        let assembler = assembler(source);

        let doc = assembler.assemble_page("about").await.unwrap();
        assert_eq!(doc.sections[0].props["image"], Value::Null);
    }

    #[tokio::test]
    async fn test_page_without_builder_renders_empty() {
        let assembler = assembler(MockSource::new().with_page("bare", json!({})));

        let doc = assembler.assemble_page("bare").await.unwrap();
        assert_eq!(doc.kind, BuilderKind::TopLevel);
        assert!(doc.sections.is_empty());
    }

    #[tokio::test]
    async fn test_post_assembly_includes_related_and_sections() {
        let current = Entity {
            id: 10,
            slug: "scaling-seo".into(),
            categories: vec![3],
            acf: json!({
                "inner_page_builder": [
                    {"acf_fc_layout": "content_block", "title": "Deep dive"},
                ]
            }),
            ..Entity::default()
        };
        let sibling = Entity {
            id: 11,
            slug: "other".into(),
            categories: vec![3],
            ..Entity::default()
        };
        let source = MockSource::new()
            .with_post(current.clone())
            .with_recent_posts(vec![current.clone(), sibling.clone()]);
        let assembler = assembler(source);

        let doc = assembler.assemble_post("scaling-seo").await.unwrap();

        assert_eq!(doc.post.id, 10);
        // The post itself is excluded from its related list.
        assert_eq!(doc.related.len(), 1);
        assert_eq!(doc.related[0].id, 11);
        assert_eq!(doc.sections[0].renderer, SectionRenderer::ContentBlock);
    }

    #[tokio::test]
    async fn test_related_posts_capped() {
        let current = Entity {
            id: 1,
            slug: "a".into(),
            categories: vec![2],
            ..Entity::default()
        };
        let pool: Vec<Entity> = (2..=9)
            .map(|id| Entity {
                id,
                categories: vec![2],
                ..Entity::default()
            })
            .collect();
        let source = MockSource::new()
            .with_post(current)
            .with_recent_posts(pool);
        let assembler = assembler(source);

        let doc = assembler.assemble_post("a").await.unwrap();
        assert_eq!(doc.related.len(), RELATED_MAX);
    }

    #[tokio::test]
    async fn test_service_uses_inner_table() {
        let source = MockSource::new().with_service(
            "web-design",
            json!({
                "inner_page_builder": [
                    {"acf_fc_layout": "usp_section", "service_icon": 4},
                ]
            }),
        );
        let assembler = assembler(source);

        let doc = assembler.assemble_service("web-design").await.unwrap();
        assert_eq!(doc.kind, BuilderKind::Inner);
        assert_eq!(doc.sections[0].renderer, SectionRenderer::InnerUsp);
    }
}
