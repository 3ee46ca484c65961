//! Site chrome endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use hoild_site::{SiteChrome, load_chrome};

use crate::state::AppState;

/// Handle GET /api/chrome.
///
/// Best-effort by construction: parts the CMS fails to deliver come back
/// empty, so this endpoint never 500s on CMS trouble.
pub(crate) async fn get_chrome(State(state): State<Arc<AppState>>) -> Json<SiteChrome> {
    Json(load_chrome(state.assembler.source().as_ref()).await)
}
