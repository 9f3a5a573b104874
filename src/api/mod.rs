pub mod analysis;
pub mod health;
pub mod signals;
pub mod symbols;
pub mod technical;

use crate::AppState;
use axum::Router;
use chrono::Utc;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(symbols::router())
        .nest("/api/technical", technical::router())
        .nest("/api/signals", signals::router())
        .nest("/api/fundamental", analysis::fundamental_router())
        .nest("/api/sentiment", analysis::sentiment_router())
}

/// RFC 3339 timestamp attached to every symbol response.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339()
}
