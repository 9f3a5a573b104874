//! Fundamental and sentiment report endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::services::analysis::{FundamentalReport, SentimentReport};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse<T> {
    pub symbol: String,
    pub timestamp: String,
    pub analysis: T,
}

impl<T> AnalysisResponse<T> {
    fn new(symbol: &str, analysis: T) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            timestamp: super::timestamp(),
            analysis,
        }
    }
}

pub fn fundamental_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_fundamental))
}

pub fn sentiment_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_sentiment))
}

async fn get_fundamental(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<AnalysisResponse<FundamentalReport>>> {
    let report = state
        .loader
        .load_fundamentals(&symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No fundamental data found for {}", symbol)))?;

    Ok(Json(AnalysisResponse::new(&symbol, report)))
}

async fn get_sentiment(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<AnalysisResponse<SentimentReport>>> {
    let report = state
        .loader
        .load_sentiment(&symbol)?
        .ok_or_else(|| AppError::NotFound(format!("No sentiment data found for {}", symbol)))?;

    Ok(Json(AnalysisResponse::new(&symbol, report)))
}
