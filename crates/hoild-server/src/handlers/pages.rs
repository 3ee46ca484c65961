//! Builder-page endpoints.
//!
//! Return the assembled render sequence for a page; the frontend mounts one
//! component per instruction.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use hoild_builder::SectionInstruction;
use hoild_content::BuilderKind;
use hoild_site::PageDocument;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for page endpoints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResponse {
    /// Requested slug.
    slug: String,
    /// Which builder family the page was authored with.
    kind: BuilderKind,
    /// Ordered render instructions.
    sections: Vec<SectionInstruction>,
    /// Application version.
    version: String,
}

impl PageResponse {
    fn new(slug: String, doc: PageDocument, version: &str) -> Self {
        Self {
            slug,
            kind: doc.kind,
            sections: doc.sections,
            version: version.to_owned(),
        }
    }
}

/// Handle GET /api/home.
pub(crate) async fn get_home(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let doc = state
        .assembler
        .assemble_home()
        .await
        .ok_or_else(|| ServerError::NotFound("home".to_owned()))?;

    Ok(Json(PageResponse::new(
        "home".to_owned(),
        doc,
        &state.version,
    )))
}

/// Handle GET /api/pages/{slug}.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let doc = state
        .assembler
        .assemble_page(&slug)
        .await
        .ok_or_else(|| ServerError::NotFound(slug.clone()))?;

    Ok(Json(PageResponse::new(slug, doc, &state.version)))
}

/// Handle GET /api/services/{slug}.
pub(crate) async fn get_service(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageResponse>, ServerError> {
    let doc = state
        .assembler
        .assemble_service(&slug)
        .await
        .ok_or_else(|| ServerError::NotFound(slug.clone()))?;

    Ok(Json(PageResponse::new(slug, doc, &state.version)))
}
