//! tradesignal - Technical indicators and composite trade signals over local market data

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::{DataLoader, SignalPipeline};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub loader: Arc<DataLoader>,
    pub pipeline: Arc<SignalPipeline>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let loader = DataLoader::with_benchmarks(config.data_dir.clone(), config.analysis.benchmarks);
        let pipeline = SignalPipeline::new(config.analysis).with_chart_limit(config.chart_limit);
        Self {
            config: Arc::new(config),
            loader: Arc::new(loader),
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Build the application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use error::{AppError, SeriesError};
pub use types::*;
