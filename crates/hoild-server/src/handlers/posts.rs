//! Article endpoints (blog posts and insights).

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use hoild_builder::SectionInstruction;
use hoild_wp::Entity;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/blog/{slug} and /api/insights/{slug}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostResponse {
    /// The article entity (title, rendered content, dates).
    post: Entity,
    /// Related posts, newest first, the article itself excluded.
    related: Vec<Entity>,
    /// Render instructions from the article's optional inner builder.
    sections: Vec<SectionInstruction>,
}

/// Handle GET /api/blog/{slug} and /api/insights/{slug}.
///
/// Both routes serve the same content family; only the frontend path
/// differs.
pub(crate) async fn get_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PostResponse>, ServerError> {
    let doc = state
        .assembler
        .assemble_post(&slug)
        .await
        .ok_or(ServerError::NotFound(slug))?;

    Ok(Json(PostResponse {
        post: doc.post,
        related: doc.related,
        sections: doc.sections,
    }))
}
