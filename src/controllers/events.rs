use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::config::EventsServiceConfig;
use crate::models::PageRequest;
use crate::render::{render_cycle, render_html, EventsView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(events_page))
        .route("/api/events", get(events_json))
}

#[derive(Debug, Deserialize, Validate)]
pub struct EventsQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1))]
    pub quantity: Option<u32>,
}

impl EventsQuery {
    fn page_request(&self, defaults: &EventsServiceConfig) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(defaults.default_page),
            self.quantity.unwrap_or(defaults.default_quantity),
        )
    }
}

// Unparseable values (`page=abc`, `page=-1`) and out-of-range ones share one message.
fn pagination(query: Result<Query<EventsQuery>, QueryRejection>) -> Result<EventsQuery, String> {
    let Query(params) = query.map_err(|rejection| rejection.body_text())?;
    params.validate().map_err(|errors| errors.to_string())?;
    Ok(params)
}

fn view_status(view: &EventsView) -> StatusCode {
    if view.is_loaded() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    }
}

// GET /events
pub async fn events_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Response {
    let params = match pagination(query) {
        Ok(params) => params,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid pagination: {message}"),
            )
                .into_response();
        }
    };

    let request = params.page_request(&state.config.events_service);
    let view = render_cycle(&state.events_client, request).await;

    match render_html(&view) {
        Ok(html) => (view_status(&view), Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render events page: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render events page",
            )
                .into_response()
        }
    }
}

// GET /api/events
pub async fn events_json(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Response {
    let params = match pagination(query) {
        Ok(params) => params,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "error": { "kind": "validation", "message": message }
                })),
            )
                .into_response();
        }
    };

    let request = params.page_request(&state.config.events_service);
    let view = render_cycle(&state.events_client, request).await;
    let status = view_status(&view);

    let body = match view {
        EventsView::Loaded { units } => json!({
            "success": true,
            "events": units,
            "count": units.len()
        }),
        EventsView::Failed { kind, message } => json!({
            "success": false,
            "error": { "kind": kind, "message": message }
        }),
    };

    (status, Json(body)).into_response()
}
