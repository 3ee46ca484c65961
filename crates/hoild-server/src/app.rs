//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/home", get(handlers::pages::get_home))
        .route("/api/pages/{slug}", get(handlers::pages::get_page))
        .route("/api/services/{slug}", get(handlers::pages::get_service))
        .route("/api/blog/{slug}", get(handlers::posts::get_post))
        .route("/api/insights/{slug}", get(handlers::posts::get_post))
        .route("/api/chrome", get(handlers::chrome::get_chrome))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
