//! WordPress REST API client.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::WpError;
use crate::source::ContentSource;
use crate::types::{Entity, MediaObject, MenuItem};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// REST route suffix for the core WP v2 API.
const WP_V2: &str = "/wp/v2";

/// WordPress REST API client.
///
/// Targets the core `wp/v2` routes for entities and media, and a site-custom
/// namespace (e.g. `hoild/v1`) for menu and header/footer endpoints.
pub struct WpClient {
    http: reqwest::Client,
    /// Core API base, e.g. `https://cms.example.com/wp-json/wp/v2`.
    api_base: String,
    /// REST root, e.g. `https://cms.example.com/wp-json`.
    rest_root: String,
    /// Custom namespace under the REST root, e.g. `hoild/v1`.
    namespace: String,
}

impl WpClient {
    /// Create a client from the core API base URL and custom namespace.
    ///
    /// `base_url` points at the `wp/v2` route (with or without a trailing
    /// slash); the REST root for custom endpoints is derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`WpError::HttpRequest`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str, namespace: &str) -> Result<Self, WpError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT))
            .build()?;

        let api_base = base_url.trim_end_matches('/').to_owned();
        let rest_root = api_base
            .strip_suffix(WP_V2)
            .unwrap_or(&api_base)
            .to_owned();

        Ok(Self {
            http,
            api_base,
            rest_root,
            namespace: namespace.trim_matches('/').to_owned(),
        })
    }

    /// URL for a custom-namespace endpoint.
    fn custom_url(&self, endpoint: &str) -> String {
        format!("{}/{}/{endpoint}", self.rest_root, self.namespace)
    }

    /// GET a URL and deserialize the JSON body.
    ///
    /// Error statuses map to [`WpError::HttpResponse`]; callers decide
    /// whether that collapses to `None`/empty.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WpError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WpError::HttpResponse {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch the first entity of a collection matching a slug.
    ///
    /// WP answers `?slug=` queries with an array; some endpoints return a
    /// single object instead, which is accepted when it carries an id.
    /// Error statuses collapse to `Ok(None)`.
    async fn first_by_slug(&self, collection: &str, slug: &str) -> Result<Option<Entity>, WpError> {
        let encoded = utf8_percent_encode(slug, NON_ALPHANUMERIC);
        let url = format!("{}/{collection}?slug={encoded}&_embed", self.api_base);

        let body: Value = match self.get_json(&url).await {
            Ok(body) => body,
            Err(WpError::HttpResponse { status, url }) => {
                tracing::warn!(status, url = %url, collection, "entity lookup failed");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let entity = match body {
            Value::Array(mut items) if !items.is_empty() => items.remove(0),
            single @ Value::Object(_) if single.get("id").is_some() => single,
            _ => return Ok(None),
        };

        Ok(Some(serde_json::from_value(entity)?))
    }
}

#[async_trait]
impl ContentSource for WpClient {
    async fn page_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        self.first_by_slug("pages", slug).await
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        self.first_by_slug("posts", slug).await
    }

    async fn service_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        self.first_by_slug("services", slug).await
    }

    async fn testimonial_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        self.first_by_slug("testimonial", slug).await
    }

    async fn case_study_by_slug(&self, slug: &str) -> Result<Option<Entity>, WpError> {
        self.first_by_slug("case_study", slug).await
    }

    async fn media_by_id(&self, id: u64) -> Result<Option<MediaObject>, WpError> {
        let url = format!("{}/media/{id}", self.api_base);
        match self.get_json(&url).await {
            Ok(media) => Ok(Some(media)),
            Err(WpError::HttpResponse { status, url }) => {
                tracing::warn!(status, url = %url, id, "media lookup failed");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn recent_posts(
        &self,
        categories: &[u64],
        per_page: u32,
    ) -> Result<Vec<Entity>, WpError> {
        let mut url = format!(
            "{}/posts?per_page={per_page}&orderby=date&order=desc&_embed",
            self.api_base
        );
        if !categories.is_empty() {
            let joined = categories
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            url.push_str("&categories=");
            url.push_str(&joined);
        }
        self.get_json(&url).await
    }

    async fn menu(&self) -> Vec<MenuItem> {
        let url = self.custom_url("menu");
        match self.get_json(&url).await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "menu fetch failed");
                Vec::new()
            }
        }
    }

    async fn header_options(&self) -> Value {
        self.best_effort_object("header-options").await
    }

    async fn footer_widgets(&self) -> Map<String, Value> {
        let url = self.custom_url("footer-widgets");
        match self.get_json(&url).await {
            Ok(Value::Object(widgets)) => widgets,
            Ok(_) => Map::new(),
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "footer widgets fetch failed");
                Map::new()
            }
        }
    }

    async fn footer_options(&self) -> Value {
        self.best_effort_object("footer-options").await
    }
}

impl WpClient {
    /// GET a custom-namespace endpoint, degrading to `{}` on any failure.
    async fn best_effort_object(&self, endpoint: &str) -> Value {
        let url = self.custom_url(endpoint);
        match self.get_json(&url).await {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => Value::Object(Map::new()),
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "options fetch failed");
                Value::Object(Map::new())
            }
        }
    }
}
