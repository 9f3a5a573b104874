use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SymbolsResponse {
    pub symbols: Vec<String>,
    pub default: String,
}

/// Symbols with price data on disk.
async fn list_symbols(State(state): State<AppState>) -> Json<SymbolsResponse> {
    Json(SymbolsResponse {
        symbols: state.loader.available_symbols(),
        default: state.config.default_symbol.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/symbols", get(list_symbols))
}
