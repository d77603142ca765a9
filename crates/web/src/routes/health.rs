use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use serde::Serialize;

use crate::WebState;

/// Liveness of the BFF itself. The backend is named, not contacted.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    backend: String,
    /// Date the calendars are currently projected from
    today: NaiveDate,
    pending_selections: usize,
}

#[derive(Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

async fn health_check(State(state): State<Arc<WebState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.backend.base_url().to_string(),
        today: state.clock.today(),
        pending_selections: state.selections.len().await,
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<WebState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
