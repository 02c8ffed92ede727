//! HTTP error mapping.
//!
//! Handlers return `Result<_, ApiError>`; internal errors are logged here and
//! only a generic message reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::IdError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("member has donations in open counts")]
    OpenCounts { open_counts: Vec<String> },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<IdError> for ApiError {
    fn from(e: IdError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::OpenCounts { open_counts } => (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "Cannot delete member with donations in open counts",
                    "openCounts": open_counts,
                })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                let message = format!("{:#}", e);
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::OpenCounts {
                open_counts: vec!["Week 1".into()]
            }
            .into_response()
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("db down"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(IdError::EmptyChurchId).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
