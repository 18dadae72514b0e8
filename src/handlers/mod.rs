pub mod quiz;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::{names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::HEALTH_URL, get(health))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
