use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::num::ParseIntError;
use thiserror::Error;

/// Central error type for request handling
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::MalformedJson(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            // Keeps the framework's status, e.g. 413 for an oversized body
            AppError::Body(rejection) => (rejection.status(), "INVALID_BODY"),
        };

        tracing::warn!(status = %status, "Rejected request: {}", self);

        let body = Json(json!({
            "error": code,
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

/// Errors raised while resolving startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
