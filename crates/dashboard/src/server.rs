//! HTTP server
//!
//! Axum routes around the rendered dashboard. The row selection is the
//! only mutable state; it lives behind an `RwLock` in shared state and
//! is updated by the drilldown endpoint.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::data::{root_causes, RootCauseRecord};
use crate::drilldown::{render_drilldown, Selection};
use crate::page::render_page;
use crate::tabs::TabBar;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("row index {index} out of range (have {len} records)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("address parse error: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match self {
            DashboardError::RowOutOfRange { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Shared server state.
pub struct AppState {
    records: &'static [RootCauseRecord],
    selection: RwLock<Selection>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: root_causes(),
            selection: RwLock::new(Selection::NoSelection),
        }
    }

    pub async fn selection(&self) -> Selection {
        *self.selection.read().await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the dashboard router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/drilldown/:index", get(drilldown))
        .route("/health", get(health))
        .route("/api/date-range", post(date_range))
        .route("/api/export", post(export))
        .route("/api/filters", post(filters))
        .route("/api/investigate", post(investigate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let mut tabs = TabBar::default();
    if let Some(tab) = params.get("tab") {
        if !tabs.activate(tab) {
            debug!(%tab, "ignoring unknown tab");
        }
    }
    let selection = *state.selection.read().await;
    Html(render_page(state.records, selection, &tabs))
}

/// Select a row and return the repainted drilldown fragment.
async fn drilldown(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Html<String>, DashboardError> {
    let mut selection = state.selection.write().await;
    selection.select(index, state.records)?;

    let record = &state.records[index];
    debug!(index, cause = record.cause, "row selected");
    Ok(Html(render_drilldown(record)))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct DateRangeBody {
    range: String,
}

/// The date range selector only logs in this version; data is fixed.
async fn date_range(Json(body): Json<DateRangeBody>) -> impl IntoResponse {
    info!(range = %body.range, "date range changed");
    StatusCode::NO_CONTENT
}

async fn export() -> impl IntoResponse {
    Json(json!({ "message": "Export would download a CSV/PDF report" }))
}

async fn filters() -> impl IntoResponse {
    Json(json!({ "message": "Filter panel would open here" }))
}

#[derive(Debug, Deserialize)]
struct InvestigateBody {
    pattern: String,
}

async fn investigate(Json(body): Json<InvestigateBody>) -> impl IntoResponse {
    info!(pattern = %body.pattern, "investigation requested");
    Json(json!({ "message": format!("Investigation panel would open for: {}", body.pattern) }))
}

/// Serve the dashboard until the process is stopped.
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<(), DashboardError> {
    let app = router(state);
    info!("Dashboard listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn app(state: Arc<AppState>) -> Router {
        router(state)
    }

    #[tokio::test]
    async fn index_renders_the_dashboard() {
        let state = Arc::new(AppState::new());
        let response = app(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(r#"id="rootCauseTable""#));
        assert!(body.contains(r#"id="drilldownPanel""#));
    }

    #[tokio::test]
    async fn drilldown_selects_the_row_and_repaints() {
        let state = Arc::new(AppState::new());
        let response = app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/drilldown/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Selected: Warehouse Stock Mismatch (128 occurrences)"));
        assert_eq!(state.selection().await, Selection::Selected(2));
    }

    #[tokio::test]
    async fn drilldown_out_of_range_is_404_and_keeps_state() {
        let state = Arc::new(AppState::new());
        let response = app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/drilldown/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.selection().await, Selection::NoSelection);
    }

    #[tokio::test]
    async fn reselecting_the_same_row_is_idempotent() {
        let state = Arc::new(AppState::new());

        let first = app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/drilldown/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let second = app(state.clone())
            .oneshot(
                Request::builder()
                    .uri("/drilldown/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_text(first).await, body_text(second).await);
        assert_eq!(state.selection().await, Selection::Selected(1));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let state = Arc::new(AppState::new());
        let response = app(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_activates_a_known_tab() {
        let state = Arc::new(AppState::new());
        let response = app(state)
            .oneshot(
                Request::builder()
                    .uri("/?tab=patterns")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_text(response).await;
        assert!(body.contains(r#"class="tab-button active" data-tab="patterns""#));
    }
}
