pub mod events;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().merge(events::routes())
}

/// Full HTTP surface: banner, health check and the events pages.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Event Board v0.1" }))
        .route("/health", get(|| async { "OK" }))
        .merge(routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
