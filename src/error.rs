use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

/// Rejection reasons for a malformed price history.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("price series is empty")]
    Empty,

    #[error("bar {index} is dated before its predecessor")]
    Unordered { index: usize },

    #[error("duplicate bar for {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("negative volume on {date}")]
    NegativeVolume { date: NaiveDate },

    #[error("non-finite price or volume on {date}")]
    NonFinite { date: NaiveDate },

    #[error("high/low range does not contain open and close on {date}")]
    InvalidRange { date: NaiveDate },
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    InvalidSeries(#[from] SeriesError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidSeries(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
