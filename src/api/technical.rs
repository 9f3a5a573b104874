//! Technical indicator endpoint.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::services::pipeline::TechnicalReport;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TechnicalResponse {
    pub symbol: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub report: TechnicalReport,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_technical))
}

/// Full indicator battery plus chart data for a symbol.
async fn get_technical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<TechnicalResponse>> {
    let series = state
        .loader
        .load_price_series(&symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No data found for {}", symbol)))?;

    debug!("Technical analysis for {} over {} bars", symbol, series.len());
    let report = state.pipeline.technical_report(&series);

    Ok(Json(TechnicalResponse {
        symbol: symbol.to_uppercase(),
        timestamp: super::timestamp(),
        report,
    }))
}
