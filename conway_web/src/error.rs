//! Error type for the game API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("API error: {self}");
        match self {
            ApiError::InvalidJson(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid JSON" }))).into_response()
            }
            ApiError::UnknownPattern(name) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Unknown pattern: {name}") })),
            )
                .into_response(),
        }
    }
}
