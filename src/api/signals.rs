//! Composite trade signal endpoint.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::types::CompositeSignal;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SignalResponse {
    pub symbol: String,
    pub timestamp: String,
    pub signal: CompositeSignal,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_signal))
}

/// Fuse every data source available for the symbol.
async fn get_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<SignalResponse>> {
    let loader = &state.loader;
    let series = loader
        .load_price_series(&symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No data found for {}", symbol)))?;

    let fundamentals = loader.load_fundamentals(&symbol)?.map(|r| r.signal_metrics());
    let sentiment = loader.load_sentiment(&symbol)?.map(|r| r.summary());
    let insider = loader.load_insider(&symbol)?;

    let signal = state.pipeline.analyze(
        &series,
        fundamentals.as_ref(),
        sentiment.as_ref(),
        insider.as_ref(),
    );

    Ok(Json(SignalResponse {
        symbol: symbol.to_uppercase(),
        timestamp: super::timestamp(),
        signal,
    }))
}
