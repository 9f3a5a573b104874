//! Liveness endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" when the data directory is readable, "degraded" otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub data_available: bool,
}

impl HealthResponse {
    fn new(data_available: bool) -> Self {
        Self {
            status: if data_available { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            timestamp: super::timestamp(),
            data_available,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(state.loader.data_dir().is_dir()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
